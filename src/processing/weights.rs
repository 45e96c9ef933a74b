//! Priority selection and the factor weight vector derived from it

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five independently scored dimensions of candidate fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    Skills,
    Experience,
    Location,
    Languages,
    Education,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::Skills,
        Factor::Experience,
        Factor::Location,
        Factor::Languages,
        Factor::Education,
    ];

    fn index(self) -> usize {
        match self {
            Factor::Skills => 0,
            Factor::Experience => 1,
            Factor::Location => 2,
            Factor::Languages => 3,
            Factor::Education => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Factor::Skills => "Skills",
            Factor::Experience => "Experience",
            Factor::Location => "Location",
            Factor::Languages => "Languages",
            Factor::Education => "Education",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user's priority selection for one scoring request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorityWeights {
    #[serde(rename = "prioritizeSkills")]
    pub skills: bool,
    #[serde(rename = "prioritizeExperience")]
    pub experience: bool,
    #[serde(rename = "prioritizeLocation")]
    pub location: bool,
    #[serde(rename = "prioritizeLanguages")]
    pub languages: bool,
    #[serde(rename = "prioritizeEducation")]
    pub education: bool,
    #[serde(rename = "prioritizeCertifications")]
    pub certifications: bool,
}

impl PriorityWeights {
    pub fn all() -> Self {
        Self {
            skills: true,
            experience: true,
            location: true,
            languages: true,
            education: true,
            certifications: true,
        }
    }

    pub fn is_selected(&self, factor: Factor) -> bool {
        match factor {
            Factor::Skills => self.skills,
            Factor::Experience => self.experience,
            Factor::Location => self.location,
            Factor::Languages => self.languages,
            Factor::Education => self.education,
        }
    }

    /// Number of scored factors selected. Certifications carry no weight.
    pub fn selected_count(&self) -> usize {
        Factor::ALL.iter().filter(|f| self.is_selected(**f)).count()
    }
}

/// Normalized weight per factor. Always sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    weights: [f64; 5],
}

impl FactorWeights {
    /// Equal shares across the selected factors. With nothing selected every
    /// factor is treated as selected, giving a uniform 0.2 each.
    pub fn from_priorities(selection: &PriorityWeights) -> Self {
        let selected = selection.selected_count();

        let mut weights = [0.0; 5];
        if selected == 0 {
            weights = [1.0 / Factor::ALL.len() as f64; 5];
        } else {
            let share = 1.0 / selected as f64;
            for factor in Factor::ALL {
                if selection.is_selected(factor) {
                    weights[factor.index()] = share;
                }
            }
        }

        Self { weights }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        self.weights[factor.index()]
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

/// Weight vector for a priority selection.
pub fn weights(selection: &PriorityWeights) -> FactorWeights {
    FactorWeights::from_priorities(selection)
}
