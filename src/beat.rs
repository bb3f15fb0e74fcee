use serde::{Deserialize, Serialize};

/// Descriptor for an instrumental the trainer plays along to.
///
/// The engine only reads `bpm` and `bars_per_loop`; loading and playing
/// the audio itself belongs to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beat {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Tempo in beats per minute, > 0
    pub bpm: f64,
    /// Loop length in bars, > 0
    pub bars_per_loop: u32,
    #[serde(default)]
    pub style: String,
    /// 1..=5
    pub energy: u8,
    /// 1..=5
    pub complexity: u8,
    /// Instrumental URL, when the host streams a full track
    #[serde(default)]
    pub audio_src: Option<String>,
}

impl Beat {
    /// Duration of one 4/4 bar at this tempo.
    pub fn seconds_per_bar(&self) -> f64 {
        240.0 / self.bpm
    }

    /// The built-in beat catalog.
    pub fn catalog() -> Vec<Beat> {
        vec![
            Beat {
                id: "custom-url".to_string(),
                name: "CUSTOM URL".to_string(),
                description: "Bring your own instrumental link.".to_string(),
                bpm: 120.0,
                bars_per_loop: 4,
                style: "custom".to_string(),
                energy: 5,
                complexity: 5,
                audio_src: Some(String::new()),
            },
            Beat {
                id: "trap-pro".to_string(),
                name: "Pro Trap Banger".to_string(),
                description: "Hard hitting 808s and rapid hats.".to_string(),
                bpm: 140.0,
                bars_per_loop: 4,
                style: "grime".to_string(),
                energy: 5,
                complexity: 4,
                audio_src: None,
            },
            Beat {
                id: "drill-uk".to_string(),
                name: "UK Drill Ghost".to_string(),
                description: "Sliding bass and syncopated snare.".to_string(),
                bpm: 142.0,
                bars_per_loop: 4,
                style: "drill".to_string(),
                energy: 5,
                complexity: 5,
                audio_src: None,
            },
            Beat {
                id: "boom-bap-90s".to_string(),
                name: "90s Boom Bap".to_string(),
                description: "Dusty drums and swing.".to_string(),
                bpm: 90.0,
                bars_per_loop: 4,
                style: "boom-bap".to_string(),
                energy: 3,
                complexity: 3,
                audio_src: None,
            },
            Beat {
                id: "chill-lofi".to_string(),
                name: "Lofi Study Flow".to_string(),
                description: "Relaxed tempo for practice.".to_string(),
                bpm: 80.0,
                bars_per_loop: 4,
                style: "generic".to_string(),
                energy: 2,
                complexity: 1,
                audio_src: None,
            },
        ]
    }

    /// Load a catalog from its JSON source representation.
    pub fn catalog_from_json(text: &str) -> Result<Vec<Beat>, serde_json::Error> {
        serde_json::from_str(text)
    }
}
