use crate::display::{DisplayMode, ModeCatalog};
use regex::Regex;

struct Parser {
    output_line_regex: Regex,
    mode_line_regex: Regex,
    freq_regex: Regex,
}

impl Parser {
    fn new() -> Self {
        Self {
            output_line_regex: Regex::new(
                r"(?x)
                ^(?P<name>\S+)
                \s(?P<status>connected|disconnected)
                \s
            ",
            )
            .expect("bad output_line_regex"),
            // Interlaced modes such as 1920x1080i deliberately fail this
            // pattern and never enter a catalog.
            mode_line_regex: Regex::new(
                r"^\s+(?P<width>\d+)x(?P<height>\d+)(?P<freqs>(?:\s+\d+\.\d{2}[ *][ +])+)$",
            )
            .expect("bad mode_line_regex"),
            freq_regex: Regex::new(r"(\d+)\.(\d{2})(\*)?").expect("bad freq_regex"),
        }
    }

    /// A connected output opens a new catalog; a disconnected one only
    /// closes the previous catalog, so its stale mode lines are skipped.
    fn parse_output_line(&self, line: &str) -> Option<Option<ModeCatalog>> {
        self.output_line_regex.captures(line).map(|caps| {
            (&caps["status"] == "connected").then(|| ModeCatalog {
                name: caps["name"].to_string(),
                modes: Vec::new(),
                current: None,
            })
        })
    }

    fn parse_mode_line(&self, line: &str, catalog: &mut ModeCatalog) {
        let Some(caps) = self.mode_line_regex.captures(line) else {
            return;
        };

        let width: i32 = caps["width"].parse().expect("bad width");
        let height: i32 = caps["height"].parse().expect("bad height");

        for caps in self.freq_regex.captures_iter(&caps["freqs"]) {
            let x: i32 = caps[1].parse().expect("bad integer part");
            let y: i32 = caps[2].parse().expect("bad fractional part");
            assert!((0..100).contains(&y));
            let frequency = x * 1000 + y * 10;

            // The star marks the rate the output is currently running at.
            if caps.get(3).is_some() {
                catalog.current = Some(catalog.modes.len());
            }

            catalog.modes.push(DisplayMode {
                width,
                height,
                scale: 1,
                frequency,
            });
        }
    }

    fn parse(&self, xrandr_output: &str) -> Vec<ModeCatalog> {
        let mut catalogs = Vec::new();
        let mut current_catalog: Option<ModeCatalog> = None;

        for line in xrandr_output.lines() {
            if let Some(output_line) = self.parse_output_line(line) {
                if let Some(catalog) = current_catalog.take() {
                    catalogs.push(catalog);
                }
                current_catalog = output_line;
            } else if let Some(catalog) = current_catalog.as_mut() {
                self.parse_mode_line(line, catalog);
            }
        }

        if let Some(catalog) = current_catalog {
            catalogs.push(catalog);
        }

        catalogs
    }
}

pub(super) fn parse(xrandr_output: &str) -> Vec<ModeCatalog> {
    Parser::new().parse(xrandr_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_output_lines_are_not_output_lines() {
        let parser = Parser::new();
        assert!(parser.parse_output_line(SCREEN_LINE).is_none());
        assert!(parser.parse_output_line(ACTIVE_MODE_LINE).is_none());
        assert!(parser.parse_output_line(PLAIN_MODE_LINE).is_none());
        for line in VERBOSE_INFO_LINES {
            assert!(parser.parse_output_line(line).is_none());
        }
    }

    #[test]
    fn connected_output_line_opens_a_catalog() {
        // Arrange
        let parser = Parser::new();

        // Act
        let catalog = parser.parse_output_line(CONNECTED_OUTPUT_LINE);

        // Assert
        let catalog = catalog
            .expect("must be an output line")
            .expect("must be connected");
        assert_eq!(catalog.name, "eDP-1");
        assert!(catalog.modes.is_empty());
        assert_eq!(catalog.current, None);
    }

    #[test]
    fn disconnected_output_line_opens_no_catalog() {
        // Arrange
        let parser = Parser::new();

        // Act
        let catalog = parser.parse_output_line(DISCONNECTED_OUTPUT_LINE);

        // Assert
        assert!(catalog.expect("must be an output line").is_none());
    }

    #[test]
    fn mode_line_expands_to_one_entry_per_rate() {
        // Arrange
        let parser = Parser::new();
        let mut catalog = empty_catalog();

        // Act
        parser.parse_mode_line(PLAIN_MODE_LINE, &mut catalog);

        // Assert
        assert_eq!(
            catalog.modes,
            [
                DisplayMode {
                    width: 1680,
                    height: 1050,
                    scale: 1,
                    frequency: 59950,
                },
                DisplayMode {
                    width: 1680,
                    height: 1050,
                    scale: 1,
                    frequency: 59880,
                },
            ]
        );
        assert_eq!(catalog.current, None);
    }

    #[test]
    fn star_marks_the_current_mode() {
        // Arrange
        let parser = Parser::new();
        let mut catalog = empty_catalog();

        // Act
        parser.parse_mode_line(ACTIVE_PREFERRED_MODE_LINE, &mut catalog);
        parser.parse_mode_line(PLAIN_MODE_LINE, &mut catalog);

        // Assert: 60.02 carries the star, which is the first entry.
        assert_eq!(catalog.modes.len(), 8);
        assert_eq!(catalog.current, Some(0));
    }

    #[test]
    fn star_on_a_later_line_points_past_the_earlier_entries() {
        // Arrange
        let parser = Parser::new();
        let mut catalog = empty_catalog();

        // Act
        parser.parse_mode_line(PLAIN_MODE_LINE, &mut catalog);
        parser.parse_mode_line(ACTIVE_MODE_LINE, &mut catalog);

        // Assert
        assert_eq!(catalog.modes.len(), 4);
        assert_eq!(catalog.current, Some(2));
    }

    #[test]
    fn non_mode_lines_are_ignored() {
        // Arrange
        let parser = Parser::new();
        let mut catalog = empty_catalog();

        // Act
        parser.parse_mode_line(SCREEN_LINE, &mut catalog);
        parser.parse_mode_line(CONNECTED_OUTPUT_LINE, &mut catalog);
        parser.parse_mode_line(DISCONNECTED_OUTPUT_LINE, &mut catalog);
        for line in VERBOSE_INFO_LINES {
            parser.parse_mode_line(line, &mut catalog);
        }

        // Assert
        assert!(catalog.modes.is_empty());
    }

    #[test]
    fn full_listing_becomes_ordered_catalogs_of_connected_outputs() {
        // Arrange
        let parser = Parser::new();

        // Act
        let catalogs = parser.parse(TEST_OUTPUT);

        // Assert: two connected outputs, in listing order; the mode lines
        // under the disconnected HDMI-1 are dropped.
        assert_eq!(catalogs.len(), 2);

        assert_eq!(catalogs[0].name, "eDP-1");
        assert_eq!(catalogs[0].modes.len(), 11);
        assert_eq!(catalogs[0].current, Some(0));
        assert_eq!(
            catalogs[0].modes[0],
            DisplayMode {
                width: 1920,
                height: 1080,
                scale: 1,
                frequency: 60020,
            }
        );

        assert_eq!(catalogs[1].name, "HDMI-2");
        assert_eq!(catalogs[1].modes.len(), 8);
        assert_eq!(catalogs[1].current, None);
        assert_eq!(
            catalogs[1].modes[7],
            DisplayMode {
                width: 640,
                height: 480,
                scale: 1,
                frequency: 59940,
            }
        );
    }

    fn empty_catalog() -> ModeCatalog {
        ModeCatalog {
            name: "eDP-1".to_string(),
            modes: Vec::new(),
            current: None,
        }
    }

    const SCREEN_LINE: &str =
        "Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384";

    const CONNECTED_OUTPUT_LINE: &str = "eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 194mm";
    const DISCONNECTED_OUTPUT_LINE: &str =
        "DP-1 disconnected (normal left inverted right x axis y axis)";

    const ACTIVE_PREFERRED_MODE_LINE: &str =
        "   1920x1080     60.02*+  60.01    59.97    59.96    59.93    48.02  ";
    const ACTIVE_MODE_LINE: &str = "   1680x1050     59.95*   59.88  ";
    const PLAIN_MODE_LINE: &str = "   1680x1050     59.95    59.88  ";
    const VERBOSE_INFO_LINES: [&str; 3] = [
        "  1920x1080 (0x501) 148.500MHz +HSync +VSync ",
        "        h: width  1920 start 2008 end 2052 total 2200 skew    0 clock  67.50KHz ",
        "        v: height 1080 start 1084 end 1089 total 1125           clock  60.00Hz ",
    ];

    const TEST_OUTPUT: &str = r#"
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 194mm
   1920x1080     60.02*+  60.01    59.97    59.96    59.93    48.02  
   1680x1050     59.95    59.88  
   1280x720      60.00    59.99    59.86  
DP-1 disconnected (normal left inverted right x axis y axis)
HDMI-1 disconnected 1920x1080+0+0 (normal left inverted right x axis y axis) 0mm x 0mm
  1920x1080 (0x501) 148.500MHz +HSync +VSync
        h: width  1920 start 2008 end 2052 total 2200 skew    0 clock  67.50KHz
        v: height 1080 start 1084 end 1089 total 1125           clock  60.00Hz
HDMI-2 connected (normal left inverted right x axis y axis)
   3840x2160     30.00    25.00    24.00  
   1920x1080     60.00    50.00    59.94  
   1920x1080i    60.00    50.00    59.94  
   640x480       60.00    59.94  
"#;
}
