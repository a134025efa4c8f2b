//! The embedded fallback dataset.
//!
//! These records are shown unconditionally alongside whatever the listing
//! endpoint returns, not merely when the fetch fails. They use the source-(b)
//! naming convention (`name`/`speciality`/`locality`/`address`) and go
//! through [`Doctor::from_fallback`] like any other record.
//!
//! [`Doctor::from_fallback`]: crate::Doctor::from_fallback

use crate::types::FallbackDoctorRecord;

/// The fixed fallback records, in dataset order. Order matters: synthetic
/// ids are derived from each record's position.
pub fn fallback_doctors() -> Vec<FallbackDoctorRecord> {
    vec![
        FallbackDoctorRecord {
            name: "A-02130936-Tharun Tharun".to_string(),
            experience: "12 years".to_string(),
            speciality: "Cardiologist".to_string(),
            locality: "LB Nagar".to_string(),
            address: "Samraksha hospital, Chaitanyapuri, Telangana, 500060.0".to_string(),
            phone: None,
            email: Some("drtharunm@gmail.com".to_string()),
            gender: "male".to_string(),
            languages: vec![
                "English".to_string(),
                "Hindi".to_string(),
                "Telugu".to_string(),
            ],
            rating: 4.8,
            consultation_fee: 900,
            doctor_photo: None,
            city: "Hyderabad".to_string(),
            state: "Telangana".to_string(),
        },
        FallbackDoctorRecord {
            name: "A-02130938-Pavan Kumar Pavan Kumar".to_string(),
            experience: "8 years".to_string(),
            speciality: "Gastroenterologist".to_string(),
            locality: "Karnataka".to_string(),
            address: "Karnataka".to_string(),
            phone: None,
            email: Some("dr.pavankumar04@gmail.com".to_string()),
            gender: "male".to_string(),
            languages: vec![
                "English".to_string(),
                "Hindi".to_string(),
                "Kannada".to_string(),
            ],
            rating: 4.2,
            consultation_fee: 750,
            doctor_photo: None,
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
        },
        FallbackDoctorRecord {
            name: "A-02130940-Vamshi Krishna Vamshi Krishna".to_string(),
            experience: "15 years".to_string(),
            speciality: "Gastroenterologist".to_string(),
            locality: "Himachal Pradesh".to_string(),
            address: "Himachal Pradesh".to_string(),
            phone: None,
            email: None,
            gender: "male".to_string(),
            languages: vec![
                "English".to_string(),
                "Hindi".to_string(),
                "Pahari".to_string(),
            ],
            rating: 4.9,
            consultation_fee: 950,
            doctor_photo: None,
            city: "Shimla".to_string(),
            state: "Himachal Pradesh".to_string(),
        },
        FallbackDoctorRecord {
            name: "A-02191280-Krishna Chaitanya Doctor".to_string(),
            experience: "10 years".to_string(),
            speciality: "Dentist".to_string(),
            locality: "Madhya Pradesh".to_string(),
            address: "Madhya Pradesh".to_string(),
            phone: Some(8897656245),
            email: Some("drchaitanyak9@gmail.com".to_string()),
            gender: "male".to_string(),
            languages: vec!["English".to_string(), "Hindi".to_string(), "Hindi".to_string()],
            rating: 4.5,
            consultation_fee: 800,
            doctor_photo: None,
            city: "Bhopal".to_string(),
            state: "Madhya Pradesh".to_string(),
        },
    ]
}
