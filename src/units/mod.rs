//! 단위 정의 및 변환 모듈 모음.

pub mod temperature;
pub mod volume;

pub use temperature::{convert_temperature, TemperatureUnit};
pub use volume::{convert_volume, volume_factor, VolumeFactor, VolumeUnit};
