use skymap_core::fetch::FetchRequest;

/// Editable fields of the "New map" form.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchFormState {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub date_time: String,
    pub radius_deg: f64,
    pub pixels: u32,
    /// Empty means "let the script choose".
    pub survey: String,
}

impl FetchFormState {
    pub fn from_request(request: &FetchRequest) -> Self {
        Self {
            ra_deg: request.ra_deg,
            dec_deg: request.dec_deg,
            date_time: request.date_time.clone(),
            radius_deg: request.radius_deg,
            pixels: request.pixels,
            survey: request.survey.clone().unwrap_or_default(),
        }
    }

    /// Build a request, keeping `base` for fields the form does not edit.
    pub fn to_request(&self, base: &FetchRequest) -> FetchRequest {
        let survey = self.survey.trim();
        FetchRequest {
            ra_deg: self.ra_deg,
            dec_deg: self.dec_deg,
            date_time: self.date_time.trim().to_string(),
            radius_deg: self.radius_deg,
            pixels: self.pixels,
            survey: (!survey.is_empty()).then(|| survey.to_string()),
            ..base.clone()
        }
    }
}
