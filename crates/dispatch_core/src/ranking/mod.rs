pub mod algorithm;
pub mod euclidean;
pub mod expanding_ring;
pub mod manhattan;

pub use algorithm::Ranker;
pub use euclidean::EuclideanRanker;
pub use expanding_ring::ExpandingRingRanker;
pub use manhattan::ManhattanRanker;

/// Maximum number of drivers any ranking strategy returns.
pub const MAX_RESULTS: usize = 5;

/// Which ranking strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankerKind {
    Euclidean,
    Manhattan,
    ExpandingRing,
}

impl RankerKind {
    pub fn name(self) -> &'static str {
        match self {
            RankerKind::Euclidean => "euclidean",
            RankerKind::Manhattan => "manhattan",
            RankerKind::ExpandingRing => "expanding_ring",
        }
    }
}

/// Instantiate the strategy for a kind.
pub fn create_ranker(kind: RankerKind) -> Box<dyn Ranker> {
    match kind {
        RankerKind::Euclidean => Box::new(EuclideanRanker),
        RankerKind::Manhattan => Box::new(ManhattanRanker),
        RankerKind::ExpandingRing => Box::new(ExpandingRingRanker),
    }
}

/// Wrapper for a ranking strategy trait object, for callers that pick the
/// strategy at runtime.
pub struct BoxedRanker(pub Box<dyn Ranker>);

impl BoxedRanker {
    pub fn new(ranker: Box<dyn Ranker>) -> Self {
        Self(ranker)
    }

    pub fn of_kind(kind: RankerKind) -> Self {
        Self(create_ranker(kind))
    }
}

impl std::ops::Deref for BoxedRanker {
    type Target = dyn Ranker;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
