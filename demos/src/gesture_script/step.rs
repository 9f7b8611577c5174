use std::{fmt, str::FromStr};

use arplace::{core::ScreenPoint, runtime::PinchEvent};

/// One scripted input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Tap(ScreenPoint),
    Pinch(PinchEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepParseError {
    UnknownStep(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
}

impl fmt::Display for StepParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStep(s) => write!(
                f,
                "Unknown step '{}' (expected tap:X,Y, begin, change:F, end or cancel)",
                s
            ),
            Self::MissingArgument(step) => write!(f, "Step '{}' needs an argument", step),
            Self::InvalidNumber(s) => write!(f, "'{}' is not a number", s),
        }
    }
}

impl std::error::Error for StepParseError {}

fn parse_number(s: &str) -> Result<f32, StepParseError> {
    s.trim()
        .parse()
        .map_err(|_| StepParseError::InvalidNumber(s.to_owned()))
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let (name, argument) = match lowered.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (lowered.as_str(), None),
        };

        match (name, argument) {
            ("tap", Some(argument)) => {
                let (x, y) = argument
                    .split_once(',')
                    .ok_or(StepParseError::MissingArgument("tap"))?;
                Ok(Self::Tap(ScreenPoint::new(parse_number(x)?, parse_number(y)?)))
            }
            ("tap", None) => Err(StepParseError::MissingArgument("tap")),
            ("change", Some(argument)) => Ok(Self::Pinch(PinchEvent::Change(parse_number(
                argument,
            )?))),
            ("change", None) => Err(StepParseError::MissingArgument("change")),
            ("begin", None) => Ok(Self::Pinch(PinchEvent::Begin)),
            ("end", None) => Ok(Self::Pinch(PinchEvent::End)),
            ("cancel", None) => Ok(Self::Pinch(PinchEvent::Cancel)),
            _ => Err(StepParseError::UnknownStep(s.to_owned())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tap(point) => write!(f, "tap:{},{}", point.x, point.y),
            Self::Pinch(PinchEvent::Begin) => write!(f, "begin"),
            Self::Pinch(PinchEvent::Change(factor)) => write!(f, "change:{}", factor),
            Self::Pinch(PinchEvent::End) => write!(f, "end"),
            Self::Pinch(PinchEvent::Cancel) => write!(f, "cancel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_kind() {
        assert_eq!(
            "tap:120,480.5".parse::<Step>().unwrap(),
            Step::Tap(ScreenPoint::new(120.0, 480.5))
        );
        assert_eq!("BEGIN".parse::<Step>().unwrap(), Step::Pinch(PinchEvent::Begin));
        assert_eq!(
            "change:1.5".parse::<Step>().unwrap(),
            Step::Pinch(PinchEvent::Change(1.5))
        );
        assert_eq!("end".parse::<Step>().unwrap(), Step::Pinch(PinchEvent::End));
        assert_eq!(" cancel ".parse::<Step>().unwrap(), Step::Pinch(PinchEvent::Cancel));
    }

    #[test]
    fn rejects_malformed_steps() {
        assert_eq!(
            "tap".parse::<Step>(),
            Err(StepParseError::MissingArgument("tap"))
        );
        assert_eq!(
            "tap:12".parse::<Step>(),
            Err(StepParseError::MissingArgument("tap"))
        );
        assert_eq!(
            "change:big".parse::<Step>(),
            Err(StepParseError::InvalidNumber("big".to_owned()))
        );
        assert!(matches!(
            "begin:2".parse::<Step>(),
            Err(StepParseError::UnknownStep(_))
        ));
        assert!(matches!(
            "zoom".parse::<Step>(),
            Err(StepParseError::UnknownStep(_))
        ));
    }

    #[test]
    fn display_parses_back() {
        let step = Step::Pinch(PinchEvent::Change(2.5));
        assert_eq!(step.to_string().parse::<Step>().unwrap(), step);
    }
}
