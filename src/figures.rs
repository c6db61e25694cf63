/// A named block of ASCII art printed under the balloon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub name: &'static str,
    pub art: &'static str,
}

impl Figure {
    const fn new(name: &'static str, art: &'static str) -> Self {
        Self { name, art }
    }
}

pub const DEFAULT_NAME: &str = "gopher";
const FALLBACK_NAME: &str = "random";

const FALLBACK: Figure = Figure::new(
    FALLBACK_NAME,
    include_str!("../assets/figures/random.txt"),
);

pub const FIGURES: &[Figure] = &[
    Figure::new("gopher", include_str!("../assets/figures/gopher.txt")),
    Figure::new("cow", include_str!("../assets/figures/cow.txt")),
    Figure::new("cat", include_str!("../assets/figures/cat.txt")),
    FALLBACK,
];

pub fn names() -> impl Iterator<Item = &'static str> {
    FIGURES.iter().map(|f| f.name)
}

/// Exact, case-sensitive lookup. Anything unknown gets the "random" figure.
pub fn select(name: &str) -> Figure {
    match FIGURES.iter().find(|f| f.name == name) {
        Some(f) => *f,
        None => {
            log::warn!("Unknown figure {:?}, using {}", name, FALLBACK_NAME);
            FALLBACK
        }
    }
}
