use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::config::CoverageMode;

pub fn path(rawpath: &str) -> Result<PathBuf, String> {
    let path = Path::new(rawpath);
    if !path.exists() {
        Err(format!("{} file doesn't exist or there is no permission to read it", rawpath))
    } else {
        Ok(path.to_owned())
    }
}

pub fn coverage(mode: &str) -> Result<CoverageMode, String> {
    CoverageMode::from_str(mode)
}

pub fn numeric<T>(low: T, upper: T) -> impl Fn(&str) -> Result<T, String> + Clone + Send + Sync + 'static
where
    T: FromStr + std::fmt::Display + PartialOrd + Copy + Send + Sync + 'static,
    <T as FromStr>::Err: std::fmt::Display,
{
    move |val: &str| -> Result<T, String> {
        let number = val.parse::<T>().map_err(|e| format!("failed to parse {}: {}", val, e))?;
        if number < low || number > upper {
            return Err(format!("Value {} is expected to be inside [{}, {}] range", val, low, upper));
        }
        Ok(number)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coverage() {
        assert_eq!(super::coverage("all"), Ok(CoverageMode::AllReads));
        assert_eq!(super::coverage("proper"), Ok(CoverageMode::ProperOnly));
        for symbol in ["", "ALL", "a", "properly"] {
            assert!(super::coverage(symbol).is_err())
        }
    }

    #[test]
    fn numeric() {
        let validator = super::numeric(10, 12);
        assert!(validator("9").is_err());
        assert_eq!(validator("10"), Ok(10));
        assert_eq!(validator("12"), Ok(12));
        assert!(validator("13").is_err());
        assert!(validator("ten").is_err());

        let validator = super::numeric(1usize, usize::MAX);
        assert!(validator("0").is_err());
        assert!(validator("-1").is_err());
        assert_eq!(validator("4"), Ok(4));
    }

    #[test]
    fn path() {
        assert!(super::path("/definitely/missing/file.bam").is_err());
        assert_eq!(super::path("/"), Ok(PathBuf::from("/")));
    }
}
