use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No image selected")]
    NoImage,

    #[error("No district selected")]
    NoDistrict,

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Could not read image: {0}")]
    ImageRead(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn title(&self) -> &'static str {
        match self {
            AppError::NoImage => "कोई तस्वीर नहीं | No Image",
            AppError::NoDistrict => "जिला चुनें | Select District",
            AppError::UnsupportedImage(_) | AppError::ImageRead(_) => {
                "तस्वीर नहीं खुली | Image Not Opened"
            }
            _ => "त्रुटि | Error",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::NoImage => {
                "कृपया पहले एक तस्वीर अपलोड करें | Please upload an image first".to_string()
            }
            AppError::NoDistrict => {
                "कृपया पहले अपना जिला चुनें | Please select your district first".to_string()
            }
            AppError::UnsupportedImage(name) => {
                format!("{} is not a supported image (PNG, JPEG, GIF, WebP, BMP)", name)
            }
            _ => self.to_string(),
        }
    }
}
