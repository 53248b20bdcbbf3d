use indicatif::style::TemplateError;
use indicatif::ProgressStyle;

pub mod parse {
    use super::*;

    pub fn with_progress() -> Result<ProgressStyle, TemplateError> {
        Ok(ProgressStyle::with_template("[{elapsed_precise}] {spinner} {msg}")?.tick_strings(&[
            "▹▹▹▹▹",
            "▸▹▹▹▹",
            "▹▸▹▹▹",
            "▹▹▸▹▹",
            "▹▹▹▸▹",
            "▹▹▹▹▸",
            "▪▪▪▪▪",
        ]))
    }
}

pub mod run {
    use super::*;

    pub fn running() -> Result<ProgressStyle, TemplateError> {
        Ok(ProgressStyle::with_template("[{elapsed_precise}] {bar:60.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"))
    }

    pub fn finished() -> Result<ProgressStyle, TemplateError> {
        ProgressStyle::with_template("[{elapsed_precise}] {msg}")
    }
}
