use serde::{Deserialize, Serialize};

/// One row of the reference dataset served by `GET /api/sample-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleStudent {
    pub name: String,
    pub cgpa: f64,
    pub iq: f64,
    /// `1` when the student was placed.
    pub placement: u8,
}

impl SampleStudent {
    pub fn is_placed(&self) -> bool {
        self.placement == 1
    }
}

const SAMPLE_ROWS: [(&str, f64, f64, u8); 10] = [
    ("Rahul", 6.8, 123.0, 1),
    ("Priya", 5.9, 106.0, 0),
    ("Amit", 5.3, 121.0, 0),
    ("Sneha", 7.4, 132.0, 1),
    ("Vikram", 5.8, 142.0, 0),
    ("Neha", 8.1, 135.0, 1),
    ("Raj", 7.2, 128.0, 1),
    ("Anjali", 6.5, 118.0, 1),
    ("Karan", 5.5, 110.0, 0),
    ("Pooja", 7.8, 140.0, 1),
];

pub fn sample_students() -> Vec<SampleStudent> {
    SAMPLE_ROWS
        .iter()
        .map(|(name, cgpa, iq, placement)| SampleStudent {
            name: (*name).to_string(),
            cgpa: *cgpa,
            iq: *iq,
            placement: *placement,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_has_six_placed() {
        let students = sample_students();
        assert_eq!(students.len(), 10);
        assert_eq!(students.iter().filter(|s| s.is_placed()).count(), 6);
    }

    #[test]
    fn accepts_integer_iq_on_the_wire() {
        let student: SampleStudent =
            serde_json::from_str(r#"{"name":"Raj","cgpa":7.2,"iq":128,"placement":1}"#).unwrap();
        assert_eq!(student.iq, 128.0);
        assert!(student.is_placed());
    }
}
