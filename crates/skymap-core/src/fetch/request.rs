use serde::{Deserialize, Serialize};

use crate::config::FetchFlags;
use crate::error::{Result, SkymapError};

/// Parameters of one survey fetch, passed to the external script as named flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchRequest {
    /// Right ascension in degrees, `[0, 360]`.
    pub ra_deg: f64,
    /// Declination in degrees, `[-90, 90]`.
    pub dec_deg: f64,
    /// Observation time, `YYYY-MM-DD HH:MM:SS` (UTC).
    pub date_time: String,
    /// Search radius in degrees, `(0, 10]`.
    pub radius_deg: f64,
    /// Output resolution per side, `[1, 10000]`.
    pub pixels: u32,
    /// Named imagery survey; the script picks its own default when unset.
    pub survey: Option<String>,
    pub output: Option<String>,
}

impl Default for FetchRequest {
    fn default() -> Self {
        Self {
            ra_deg: 10.6847,
            dec_deg: 41.2689,
            date_time: "2025-10-04 11:31:02".into(),
            radius_deg: 0.02,
            pixels: 2000,
            survey: None,
            output: None,
        }
    }
}

impl FetchRequest {
    pub fn validate(&self) -> Result<()> {
        let bad = |msg: String| Err(SkymapError::InvalidFetchRequest(msg));
        if !(0.0..=360.0).contains(&self.ra_deg) {
            return bad(format!("RA {} outside [0, 360]", self.ra_deg));
        }
        if !(-90.0..=90.0).contains(&self.dec_deg) {
            return bad(format!("Dec {} outside [-90, 90]", self.dec_deg));
        }
        if !(self.radius_deg > 0.0 && self.radius_deg <= 10.0) {
            return bad(format!("radius {} outside (0, 10]", self.radius_deg));
        }
        if !(1..=10_000).contains(&self.pixels) {
            return bad(format!("pixels {} outside [1, 10000]", self.pixels));
        }
        if self.date_time.trim().is_empty() {
            return bad("date-time is empty".into());
        }
        if matches!(self.survey.as_deref(), Some(s) if s.trim().is_empty()) {
            return bad("survey name is empty".into());
        }
        Ok(())
    }

    /// Script arguments, excluding the script path itself.
    pub fn to_args(&self, flags: &FetchFlags) -> Vec<String> {
        let mut args = vec![
            flags.ra.clone(),
            self.ra_deg.to_string(),
            flags.dec.clone(),
            self.dec_deg.to_string(),
            flags.radius.clone(),
            self.radius_deg.to_string(),
            flags.pixels.clone(),
            self.pixels.to_string(),
            flags.date_time.clone(),
            self.date_time.clone(),
        ];
        if let Some(ref survey) = self.survey {
            args.push(flags.survey.clone());
            args.push(survey.clone());
        }
        if let Some(ref output) = self.output {
            args.push(flags.output.clone());
            args.push(output.clone());
        }
        args
    }
}
