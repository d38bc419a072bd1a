use std::str::FromStr;

use crate::error::ConfigError;

/// Named line colors recognized on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartColor {
    #[default]
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
    Orange,
    Gray,
}

impl ChartColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ChartColor::Red => (255, 0, 0),
            ChartColor::Green => (0, 255, 0),
            ChartColor::Blue => (0, 0, 255),
            ChartColor::Yellow => (255, 255, 0),
            ChartColor::Magenta => (255, 0, 255),
            ChartColor::Cyan => (0, 255, 255),
            ChartColor::White => (255, 255, 255),
            ChartColor::Orange => (255, 128, 0),
            ChartColor::Gray => (128, 128, 128),
        }
    }
}

impl FromStr for ChartColor {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "red" => Ok(ChartColor::Red),
            "green" => Ok(ChartColor::Green),
            "blue" => Ok(ChartColor::Blue),
            "yellow" => Ok(ChartColor::Yellow),
            "magenta" => Ok(ChartColor::Magenta),
            "cyan" => Ok(ChartColor::Cyan),
            "white" => Ok(ChartColor::White),
            "orange" => Ok(ChartColor::Orange),
            "gray" => Ok(ChartColor::Gray),
            other => Err(ConfigError::UnknownColor(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartColor;
    use crate::error::ConfigError;

    #[test]
    fn parses_every_palette_name() {
        let names = [
            "red", "green", "blue", "yellow", "magenta", "cyan", "white", "orange", "gray",
        ];
        for name in names {
            assert!(name.parse::<ChartColor>().is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "violet".parse::<ChartColor>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownColor(name) if name == "violet"));
    }

    #[test]
    fn default_color_is_red() {
        assert_eq!(ChartColor::default(), ChartColor::Red);
        assert_eq!(ChartColor::Red.rgb(), (255, 0, 0));
    }
}
