//! Command-line parsing
use std::path::Path;

use holo_core::config::{self, Config, ConfigError};
use holo_core::parse::{parse_float, parse_light_vector};

/// What the process should do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

/// Options that take a value. `?` is the only flag without one.
const VALUE_FLAGS: &str = "sabwhztWTpLPcdSfC";

/// Parse arguments (without the program name) into a validated configuration.
///
/// Options and text may be interleaved; `--` ends option parsing. Text
/// words are joined with single spaces. With no text the clock is shown,
/// unless a config file supplies text.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut options: Vec<(char, String)> = Vec::new();
    let mut words: Vec<String> = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--" {
            words.extend(args.by_ref());
            break;
        }
        if arg.len() < 2 || !arg.starts_with('-') {
            words.push(arg);
            continue;
        }

        let mut chars = arg[1..].chars();
        let Some(flag) = chars.next() else {
            continue;
        };
        if flag == '?' {
            return Ok(Command::Help);
        }
        if !VALUE_FLAGS.contains(flag) {
            return Err(ConfigError::UnknownFlag(arg));
        }
        let attached = chars.as_str();
        let value = if attached.is_empty() {
            args.next().ok_or(ConfigError::MissingValue(flag))?
        } else {
            attached.to_string()
        };
        options.push((flag, value));
    }

    let mut config = match options.iter().rev().find(|(flag, _)| *flag == 'C') {
        Some((_, path)) => Config::load(Path::new(path))?,
        None => Config::default(),
    };
    for (flag, value) in &options {
        apply_option(&mut config, *flag, value)?;
    }
    if !words.is_empty() {
        config.text = Some(words.join(" "));
    }

    config.validate()?;
    Ok(Command::Run(config))
}

fn apply_option(config: &mut Config, flag: char, value: &str) -> Result<(), ConfigError> {
    let number = || parse_float(flag, value);
    match flag {
        's' => config.set_speed(number()?),
        'a' => config.pitch_speed = number()?,
        'b' => config.yaw_speed = number()?,
        'w' => config.width = number()?,
        'h' => config.height = number()?,
        'z' => config.zoom = Some(number()?),
        't' => config.tilt = number()?,
        'W' => config.segment_width = number()?,
        'T' => config.segment_thickness = number()?,
        'p' => config.point_length = number()?,
        'S' => config.spacing_factor = number()?,
        'c' => config.contrast = number()?,
        'd' => {
            config.density = number()?;
            if !(config.density > 0.0) {
                return Err(ConfigError::NonPositiveDensity(config.density));
            }
        }
        'L' => {
            let light = parse_light_vector(value)?;
            config.light_x = light.x;
            config.light_y = light.y;
        }
        'P' => config.palette = value.to_string(),
        'f' => config.time_format = value.to_string(),
        'C' => {}
        _ => return Err(ConfigError::UnknownFlag(format!("-{flag}"))),
    }
    Ok(())
}

pub fn usage(program: &str) -> String {
    format!(
        "\
Usage: {program} [options] [TEXT TO DISPLAY...]
If no text is provided, the current date and time are displayed by default.

Animation & Geometry:
 -a <val>   A-axis (pitch) speed. Default: {pitch:.2}
 -b <val>   B-axis (yaw) speed. Default: {yaw:.2}
 -s <val>   Set both speeds (a=val, b=val/2).
 -w <val>   Character width. Default: {width:.1}
 -h <val>   Character height. Default: {height:.1}
 -S <val>   Character spacing multiplier. Default: {spacing:.2}
 -t <val>   Italic/tilt factor. Default: {tilt:.1}
 -z <val>   Manual zoom, overrides auto-sizing.

Rendering & Appearance:
 -W <val>   Segment width (fatness). Default: {seg_w:.1}
 -T <val>   Segment thickness (depth). Default: {seg_t:.1}
 -p <val>   Pointy end length. Default: {point:.2}
 -d <val>   Drawing density (step rate). Smaller is denser. Default: {density:.1}
 -L <x,y>   Light vector (no spaces). Default: {lx:.1},{ly:.1}
 -c <val>   Shading contrast. Default: {contrast:.1}
 -P <str>   Shading character palette. Default: \"{palette}\"
 -f <fmt>   Set the date/time format (strftime). Default: \"{format}\"
            Examples: \"%Y-%m-%d\" (date), \"%I:%M %p\" (12h), \"%Y-%m-%d %H:%M\" (both)
 -C <file>  Read settings from a TOML file; other options override it.

 -?         Display this help message.
 q, Esc or Ctrl-C quits.
",
        pitch = config::DEFAULT_PITCH_SPEED,
        yaw = config::DEFAULT_YAW_SPEED,
        width = config::DEFAULT_WIDTH,
        height = config::DEFAULT_HEIGHT,
        spacing = config::DEFAULT_SPACING_FACTOR,
        tilt = config::DEFAULT_TILT,
        seg_w = config::DEFAULT_SEGMENT_WIDTH,
        seg_t = config::DEFAULT_SEGMENT_THICKNESS,
        point = config::DEFAULT_POINT_LENGTH,
        density = config::DEFAULT_DENSITY,
        lx = config::DEFAULT_LIGHT_X,
        ly = config::DEFAULT_LIGHT_Y,
        contrast = config::DEFAULT_CONTRAST,
        palette = config::DEFAULT_PALETTE,
        format = config::DEFAULT_TIME_FORMAT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use holo_core::TextSource;

    fn run(args: &[&str]) -> Result<Config, ConfigError> {
        match parse_args(args.iter().map(|s| s.to_string()))? {
            Command::Run(config) => Ok(config),
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn test_no_args_shows_clock() {
        let config = run(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.text_source(),
            TextSource::Clock {
                format: "%H:%M".into()
            }
        );
    }

    #[test]
    fn test_words_are_joined() {
        let config = run(&["HELLO", "-a", "0.1", "WORLD"]).unwrap();
        assert_eq!(config.text.as_deref(), Some("HELLO WORLD"));
        assert_eq!(config.pitch_speed, 0.1);
    }

    #[test]
    fn test_empty_text_argument() {
        let config = run(&[""]).unwrap();
        assert_eq!(config.text_source(), TextSource::Literal(String::new()));
    }

    #[test]
    fn test_attached_values() {
        let config = run(&["-w10", "-h", "16", "-PX#", "-L-0.5,1"]).unwrap();
        assert_eq!(config.width, 10.0);
        assert_eq!(config.height, 16.0);
        assert_eq!(config.palette, "X#");
        assert_eq!((config.light_x, config.light_y), (-0.5, 1.0));
    }

    #[test]
    fn test_speed_sets_both() {
        let config = run(&["-s", "0.08"]).unwrap();
        assert_eq!(config.pitch_speed, 0.08);
        assert_eq!(config.yaw_speed, 0.04);
        // Later options win
        let config = run(&["-s", "0.08", "-b", "0.5"]).unwrap();
        assert_eq!(config.yaw_speed, 0.5);
    }

    #[test]
    fn test_double_dash_ends_options() {
        let config = run(&["-z", "3", "--", "-a", "x"]).unwrap();
        assert_eq!(config.zoom_override(), Some(3.0));
        assert_eq!(config.text.as_deref(), Some("-a x"));
    }

    #[test]
    fn test_help() {
        let command = parse_args(["-a", "1", "-?"].map(String::from)).unwrap();
        assert_eq!(command, Command::Help);
        assert!(usage("holo").starts_with("Usage: holo [options]"));
        assert!(usage("holo").contains("Default: \".,-~:;=!*#$@\""));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            run(&["-d", "0"]),
            Err(ConfigError::NonPositiveDensity(_))
        ));
        assert!(matches!(
            run(&["-L", "1;2"]),
            Err(ConfigError::InvalidLightVector(_))
        ));
        assert!(matches!(
            run(&["-a", "fast"]),
            Err(ConfigError::InvalidNumber { flag: 'a', .. })
        ));
        assert!(matches!(run(&["-a"]), Err(ConfigError::MissingValue('a'))));
        assert!(matches!(run(&["-x"]), Err(ConfigError::UnknownFlag(_))));
        assert!(matches!(run(&["-P", ""]), Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn test_config_file_is_overridden_by_flags() {
        let path = std::env::temp_dir().join(format!("holo-cli-test-{}.toml", std::process::id()));
        std::fs::write(&path, "density = 0.2\ntilt = 0.0\ntext = \"FILE\"\n").unwrap();
        let path_str = path.to_string_lossy().into_owned();

        let config = run(&["-t", "0.5", "-C", &path_str]).unwrap();
        assert_eq!(config.density, 0.2);
        assert_eq!(config.tilt, 0.5);
        assert_eq!(config.text.as_deref(), Some("FILE"));

        let config = run(&["-C", &path_str, "ARGS"]).unwrap();
        assert_eq!(config.text.as_deref(), Some("ARGS"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            run(&["-C", "/nonexistent/holo.toml"]),
            Err(ConfigError::Io(_))
        ));
    }
}
