use serde::{Deserialize, Serialize};

/// The refrigerant gases this tool generates curves for.
///
/// The set is closed on purpose: every artifact path, firmware table and
/// fitted model downstream is keyed on one of these three names. Pipelines
/// receive the gas (or a list of gases) explicitly; there is no global
/// fluid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gas {
    /// Propane
    R290,
    /// Difluoromethane
    R32,
    /// R32/R125 blend (near-azeotropic)
    R410A,
}

impl Gas {
    /// The fixed list the driver iterates, in output order.
    pub const ALL: [Gas; 3] = [Gas::R290, Gas::R32, Gas::R410A];

    /// Canonical name, used to key artifact file names.
    pub fn name(self) -> &'static str {
        match self {
            Gas::R290 => "R290",
            Gas::R32 => "R32",
            Gas::R410A => "R410A",
        }
    }
}

impl std::fmt::Display for Gas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
