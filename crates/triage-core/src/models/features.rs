use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Red-flag findings observed at presentation. An absent flag is `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ClinicalFeatures {
    pub chest_pain: bool,
    pub dyspnea: bool,
    pub trauma: bool,
    pub bleeding: bool,
    pub seizures: bool,
    pub altered_mental_status: bool,
}

/// Names a single flag of [`ClinicalFeatures`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ClinicalFeature {
    ChestPain,
    Dyspnea,
    Trauma,
    Bleeding,
    Seizures,
    AlteredMentalStatus,
}

impl ClinicalFeatures {
    pub fn has(&self, feature: ClinicalFeature) -> bool {
        match feature {
            ClinicalFeature::ChestPain => self.chest_pain,
            ClinicalFeature::Dyspnea => self.dyspnea,
            ClinicalFeature::Trauma => self.trauma,
            ClinicalFeature::Bleeding => self.bleeding,
            ClinicalFeature::Seizures => self.seizures,
            ClinicalFeature::AlteredMentalStatus => self.altered_mental_status,
        }
    }
}
