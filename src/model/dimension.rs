use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Lowest value any weather dimension may take.
pub const DIMENSION_MIN: i32 = -10;
/// Highest value any weather dimension may take.
pub const DIMENSION_MAX: i32 = 10;

/// Clamp a raw value into the dimension range.
pub fn clamp_level(value: i32) -> i32 {
    value.clamp(DIMENSION_MIN, DIMENSION_MAX)
}

/// Clamp a fractional value into the dimension range, then round it.
pub fn clamp_round(value: f64) -> i32 {
    value
        .clamp(f64::from(DIMENSION_MIN), f64::from(DIMENSION_MAX))
        .round() as i32
}

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// One of the four scalar weather axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Dimension {
    Temperature,
    Wind,
    Precipitation,
    Humidity,
}

string_enum!(Dimension {
    Temperature => "temperature",
    Wind => "wind",
    Precipitation => "precipitation",
    Humidity => "humidity",
});

impl Dimension {
    /// Phrases describing a rise and a fall of this dimension between two days.
    pub fn change_phrases(self) -> (&'static str, &'static str) {
        match self {
            Dimension::Temperature => ("warmer", "cooler"),
            Dimension::Wind => ("windier", "calmer"),
            Dimension::Precipitation => ("wetter", "drier"),
            Dimension::Humidity => ("more humid", "less humid"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dimensions<T>
// ---------------------------------------------------------------------------

/// One `T` per weather dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions<T> {
    pub temperature: T,
    pub wind: T,
    pub precipitation: T,
    pub humidity: T,
}

impl<T> Dimensions<T> {
    pub fn new(temperature: T, wind: T, precipitation: T, humidity: T) -> Self {
        Self {
            temperature,
            wind,
            precipitation,
            humidity,
        }
    }

    /// Build by evaluating `f` once per dimension, in `Dimension::ALL` order.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            temperature: f(Dimension::Temperature),
            wind: f(Dimension::Wind),
            precipitation: f(Dimension::Precipitation),
            humidity: f(Dimension::Humidity),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Dimension, T) -> U) -> Dimensions<U> {
        Dimensions {
            temperature: f(Dimension::Temperature, self.temperature),
            wind: f(Dimension::Wind, self.wind),
            precipitation: f(Dimension::Precipitation, self.precipitation),
            humidity: f(Dimension::Humidity, self.humidity),
        }
    }

    pub fn zip<U>(self, other: Dimensions<U>) -> Dimensions<(T, U)> {
        Dimensions {
            temperature: (self.temperature, other.temperature),
            wind: (self.wind, other.wind),
            precipitation: (self.precipitation, other.precipitation),
            humidity: (self.humidity, other.humidity),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.iter().map(move |&d| (d, &self[d]))
    }
}

impl<T> Index<Dimension> for Dimensions<T> {
    type Output = T;

    fn index(&self, dimension: Dimension) -> &T {
        match dimension {
            Dimension::Temperature => &self.temperature,
            Dimension::Wind => &self.wind,
            Dimension::Precipitation => &self.precipitation,
            Dimension::Humidity => &self.humidity,
        }
    }
}

impl<T> IndexMut<Dimension> for Dimensions<T> {
    fn index_mut(&mut self, dimension: Dimension) -> &mut T {
        match dimension {
            Dimension::Temperature => &mut self.temperature,
            Dimension::Wind => &mut self.wind,
            Dimension::Precipitation => &mut self.precipitation,
            Dimension::Humidity => &mut self.humidity,
        }
    }
}

impl Dimensions<i32> {
    /// True when every value lies in `[DIMENSION_MIN, DIMENSION_MAX]`.
    pub fn in_range(&self) -> bool {
        self.iter()
            .all(|(_, v)| (DIMENSION_MIN..=DIMENSION_MAX).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_level_bounds() {
        assert_eq!(clamp_level(-25), -10);
        assert_eq!(clamp_level(25), 10);
        assert_eq!(clamp_level(3), 3);
    }

    #[test]
    fn clamp_round_clamps_before_rounding() {
        assert_eq!(clamp_round(10.4), 10);
        assert_eq!(clamp_round(-12.0), -10);
        assert_eq!(clamp_round(2.5), 3);
        assert_eq!(clamp_round(-2.5), -3);
        assert_eq!(clamp_round(1.49), 1);
    }

    #[test]
    fn dimension_string_names() {
        assert_eq!(Dimension::Precipitation.as_str(), "precipitation");
        assert_eq!("humidity".parse::<Dimension>(), Ok(Dimension::Humidity));
        assert!("pressure".parse::<Dimension>().is_err());
        assert_eq!(Dimension::ALL.len(), 4);
    }

    #[test]
    fn index_matches_fields() {
        let mut dims = Dimensions::new(1, 2, 3, 4);
        assert_eq!(dims[Dimension::Temperature], 1);
        assert_eq!(dims[Dimension::Humidity], 4);
        dims[Dimension::Wind] = 9;
        assert_eq!(dims.wind, 9);
    }

    #[test]
    fn map_and_zip_preserve_order() {
        let a = Dimensions::new(1, 2, 3, 4);
        let b = Dimensions::new(10, 20, 30, 40);
        let summed = a.zip(b).map(|_, (x, y)| x + y);
        assert_eq!(summed, Dimensions::new(11, 22, 33, 44));

        let order: Vec<Dimension> = a.iter().map(|(d, _)| d).collect();
        assert_eq!(order, Dimension::ALL.to_vec());
    }

    #[test]
    fn serde_uses_field_names() {
        let dims = Dimensions::new(5, 2, 0, 3);
        let value = serde_json::to_value(dims).unwrap();
        assert_eq!(value["temperature"], 5);
        assert_eq!(value["humidity"], 3);
    }
}
