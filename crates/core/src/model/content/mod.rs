pub mod guide;
pub mod notice;
pub mod text;

pub use guide::{DOCX_MIME, GuideDocument, study_guide};
pub use notice::{
    ABOUT_NOTICE, APP_TITLE, ExternalLink, LinkError, TRAINING_DISCLAIMER, regulator_link,
};
pub use text::{TextError, optional_text, require_text};
