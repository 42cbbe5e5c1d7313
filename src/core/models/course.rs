use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Any JSON number; integers stay integers on the way back out.
    #[serde(rename = "durationInMonths")]
    #[schema(value_type = f64)]
    pub duration_in_months: Number,
}

/// A validated course that has not been assigned an id yet.
#[derive(Clone, Debug)]
pub struct NewCourse {
    pub name: String,
    pub duration_in_months: Number,
}

/// Field-by-field overwrite; `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub duration_in_months: Option<Number>,
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.duration_in_months.is_none()
    }

    pub fn apply(&self, course: &mut Course) {
        if let Some(name) = &self.name {
            course.name = name.clone();
        }
        if let Some(duration) = &self.duration_in_months {
            course.duration_in_months = duration.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_only_touches_present_fields() {
        let mut course = Course {
            id: "65f1c0ffee0000000000abcd".to_string(),
            name: "Algebra".to_string(),
            duration_in_months: Number::from(3),
        };
        let patch = CoursePatch {
            duration_in_months: Some(Number::from_f64(1.5).unwrap()),
            ..Default::default()
        };
        patch.apply(&mut course);
        assert_eq!(course.name, "Algebra");
        assert_eq!(course.duration_in_months.as_f64(), Some(1.5));
    }

    #[test]
    fn serializes_with_document_field_names() {
        let course = Course {
            id: "65f1c0ffee0000000000abcd".to_string(),
            name: "Algebra".to_string(),
            duration_in_months: Number::from(3),
        };
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "_id": "65f1c0ffee0000000000abcd",
                "name": "Algebra",
                "durationInMonths": 3
            })
        );
    }
}
