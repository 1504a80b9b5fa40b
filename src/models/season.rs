use std::fmt::Display;

/// The four seasons the model was trained on (northern hemisphere)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Primavera,
    Verano,
    Otono,
    Invierno,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Primavera,
        Season::Verano,
        Season::Otono,
        Season::Invierno,
    ];

    /// Label as stored in the season encoder
    pub fn label(&self) -> &'static str {
        match self {
            Season::Primavera => "Primavera",
            Season::Verano => "Verano",
            Season::Otono => "Otono",
            Season::Invierno => "Invierno",
        }
    }

    /// Season for a 0-indexed month (0 = January). Values wrap modulo 12.
    pub fn for_month_index(month: u32) -> Self {
        match month % 12 {
            2..=4 => Season::Primavera,
            5..=7 => Season::Verano,
            8..=10 => Season::Otono,
            _ => Season::Invierno,
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
