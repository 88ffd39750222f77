use crate::models::{
    Bilingual, CropRecord, DetectionResult, Profitability, Season, Severity,
};

pub const DISTRICTS: [&str; 24] = [
    "Bokaro",
    "Chatra",
    "Deoghar",
    "Dhanbad",
    "Dumka",
    "East Singhbhum",
    "Garhwa",
    "Giridih",
    "Godda",
    "Gumla",
    "Hazaribagh",
    "Jamtara",
    "Khunti",
    "Koderma",
    "Latehar",
    "Lohardaga",
    "Pakur",
    "Palamu",
    "Ramgarh",
    "Ranchi",
    "Sahibganj",
    "Seraikela Kharsawan",
    "Simdega",
    "West Singhbhum",
];

/// District whose crop table is shown for districts without their own entry.
pub const DEFAULT_CROP_DISTRICT: &str = "Ranchi";

const RANCHI_CROPS: [CropRecord; 3] = [
    CropRecord {
        name: Bilingual::new("Rice", "धान"),
        season: Season::Kharif,
        profitability: Profitability::High,
        soil_type: "Loamy",
        growth_period: "120-140 days",
    },
    CropRecord {
        name: Bilingual::new("Wheat", "गेहूं"),
        season: Season::Rabi,
        profitability: Profitability::High,
        soil_type: "Loamy",
        growth_period: "110-130 days",
    },
    CropRecord {
        name: Bilingual::new("Maize", "मक्का"),
        season: Season::Kharif,
        profitability: Profitability::Medium,
        soil_type: "Well-drained",
        growth_period: "90-110 days",
    },
];

const DHANBAD_CROPS: [CropRecord; 3] = [
    CropRecord {
        name: Bilingual::new("Rice", "धान"),
        season: Season::Kharif,
        profitability: Profitability::High,
        soil_type: "Clay loam",
        growth_period: "120-140 days",
    },
    CropRecord {
        name: Bilingual::new("Sugarcane", "गन्ना"),
        season: Season::Annual,
        profitability: Profitability::High,
        soil_type: "Rich loamy",
        growth_period: "12-18 months",
    },
    CropRecord {
        name: Bilingual::new("Potato", "आलू"),
        season: Season::Rabi,
        profitability: Profitability::Medium,
        soil_type: "Sandy loam",
        growth_period: "90-120 days",
    },
];

static CROP_TABLE: [(&str, &[CropRecord]); 2] = [
    ("Ranchi", &RANCHI_CROPS),
    ("Dhanbad", &DHANBAD_CROPS),
];

pub fn is_known_district(name: &str) -> bool {
    DISTRICTS.contains(&name)
}

/// Crop records for `district`, falling back to the default district's table.
pub fn crops_for(district: &str) -> &'static [CropRecord] {
    lookup_crops(district)
        .or_else(|| lookup_crops(DEFAULT_CROP_DISTRICT))
        .unwrap_or(&[])
}

fn lookup_crops(district: &str) -> Option<&'static [CropRecord]> {
    CROP_TABLE
        .iter()
        .find(|(name, _)| *name == district)
        .map(|(_, crops)| *crops)
}

pub const MOCK_DETECTIONS: [DetectionResult; 3] = [
    DetectionResult {
        disease: Bilingual::new("Leaf Spot", "पत्ती धब्बा रोग"),
        confidence: 87,
        severity: Severity::Medium,
        treatment: Bilingual::new(
            "Apply copper-based fungicide every 7-10 days",
            "तांबा आधारित कवकनाशी का छिड़काव करें",
        ),
    },
    DetectionResult {
        disease: Bilingual::new("Healthy Plant", "स्वस्थ पौधा"),
        confidence: 92,
        severity: Severity::Low,
        treatment: Bilingual::new(
            "Continue regular care and monitoring",
            "नियमित देखभाल जारी रखें",
        ),
    },
    DetectionResult {
        disease: Bilingual::new("Bacterial Blight", "बैक्टीरियल ब्लाइट"),
        confidence: 78,
        severity: Severity::High,
        treatment: Bilingual::new(
            "Remove infected parts and apply bactericide",
            "संक्रमित भाग हटाएं और जीवाणुनाशक लगाएं",
        ),
    },
];

pub const SOIL_RECOMMENDATIONS: [Bilingual; 4] = [
    Bilingual::new(
        "Apply organic compost to improve soil structure",
        "मिट्टी की संरचना सुधारने के लिए जैविक खाद डालें",
    ),
    Bilingual::new(
        "Consider lime application to adjust pH",
        "pH समायोजन के लिए चूना लगाने पर विचार करें",
    ),
    Bilingual::new(
        "Implement crop rotation with legumes",
        "दलहनी फसलों के साथ फसल चक्र अपनाएं",
    ),
    Bilingual::new(
        "Use precision fertilization techniques",
        "सटीक उर्वरीकरण तकनीक का उपयोग करें",
    ),
];

pub const WEATHER_TIPS: [Bilingual; 2] = [
    Bilingual::new(
        "Ensure proper drainage during rainy days",
        "बारिश के दिनों में खेत की जल निकासी का ध्यान रखें",
    ),
    Bilingual::new(
        "Irrigate during morning or evening in summer",
        "गर्मी में सिंचाई सुबह या शाम के समय करें",
    ),
];
