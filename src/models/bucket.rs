use serde::Serialize;

/// Transport classification of an activity.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Bucket {
    Walk,
    Bicycle,
    Drive,
    Passenger,
    Unclassified,
}

/// Known modes, lowercase. Anything else is `Unclassified`.
const MODE_TABLE: &[(&str, Bucket)] = &[
    ("walk", Bucket::Walk),
    ("bicycle", Bucket::Bicycle),
    ("electric bicycle", Bucket::Bicycle),
    ("car", Bucket::Drive),
    ("moped", Bucket::Drive),
    ("electric scooter", Bucket::Drive),
    ("bus", Bucket::Passenger),
    ("car passenger", Bucket::Passenger),
    ("train", Bucket::Passenger),
    ("metro", Bucket::Passenger),
    ("taxi", Bucket::Passenger),
    ("tram", Bucket::Passenger),
    ("airplane", Bucket::Passenger),
    ("ferry/boat", Bucket::Passenger),
];

impl Bucket {
    /// Exact, case-insensitive lookup of a mode name.
    pub fn classify(mode: &str) -> Self {
        let key = mode.to_lowercase();
        MODE_TABLE
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, bucket)| *bucket)
            .unwrap_or(Bucket::Unclassified)
    }
}
