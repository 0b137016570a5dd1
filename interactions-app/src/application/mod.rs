mod engagement;

pub use engagement::Engagement;
