use std::str::FromStr;

use anyhow::Context;

/// The analysis strategy applied to each uploaded image.
///
/// Exactly one strategy runs per process, selected at deploy time through
/// the `ANALYZER` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerKind {
    /// Content-safety labels (the default).
    Moderation,
    /// Text detection over the image.
    Text,
    /// Emotions of the most prominent face.
    Faces,
    /// Hosted vision-language model description and object list.
    Description,
}

/// Represents a value which cannot be converted into an [AnalyzerKind]
#[derive(Debug, thiserror::Error)]
#[error("could not convert {0} into an analyzer value")]
pub struct UnknownAnalyzer(String);

impl FromStr for AnalyzerKind {
    type Err = UnknownAnalyzer;

    fn from_str(analyzer: &str) -> Result<Self, UnknownAnalyzer> {
        match analyzer {
            "moderation" => Ok(AnalyzerKind::Moderation),
            "text" => Ok(AnalyzerKind::Text),
            "faces" => Ok(AnalyzerKind::Faces),
            "description" => Ok(AnalyzerKind::Description),
            s => Err(UnknownAnalyzer(s.to_string())),
        }
    }
}

/// The configuration parameters for the handler.
///
/// Pulled from environment variables, which is how the function's deploy
/// template populates them.
#[derive(Debug, Clone)]
pub struct Config {
    /// ARN of the channel receiving timed metadata.
    pub channel_arn: String,

    /// Which analysis strategy runs per upload.
    pub analyzer: AnalyzerKind,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let channel_arn =
            std::env::var("CHANNEL_ARN").context("CHANNEL_ARN must be provided")?;

        let analyzer = match std::env::var("ANALYZER") {
            Ok(raw) => raw
                .parse()
                .context("ANALYZER is not a recognized strategy")?,
            Err(_) => AnalyzerKind::Moderation,
        };

        Ok(Config {
            channel_arn,
            analyzer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_strategy_token() {
        assert_eq!(
            "moderation".parse::<AnalyzerKind>().unwrap(),
            AnalyzerKind::Moderation
        );
        assert_eq!("text".parse::<AnalyzerKind>().unwrap(), AnalyzerKind::Text);
        assert_eq!(
            "faces".parse::<AnalyzerKind>().unwrap(),
            AnalyzerKind::Faces
        );
        assert_eq!(
            "description".parse::<AnalyzerKind>().unwrap(),
            AnalyzerKind::Description
        );
    }

    #[test]
    fn rejects_unknown_strategy_tokens() {
        assert!("ocr".parse::<AnalyzerKind>().is_err());
        assert!("".parse::<AnalyzerKind>().is_err());
    }
}
