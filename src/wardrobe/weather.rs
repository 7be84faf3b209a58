use serde::{Deserialize, Serialize};

/// Coarse condition label attached to a weather reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    Rainy,
    #[default]
    Cloudy,
    Snowy,
}

/// Ambient weather for one outfit-generation cycle.
///
/// Immutable input to the composer: a reading is captured once per cycle and
/// never updated mid-composition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Temperature in degrees Celsius.
    pub temp_c: f64,
    pub condition: WeatherCondition,
    #[serde(default)]
    pub raining: bool,
}

impl Default for WeatherData {
    fn default() -> Self {
        Self {
            temp_c: 12.0,
            condition: WeatherCondition::Cloudy,
            raining: false,
        }
    }
}
