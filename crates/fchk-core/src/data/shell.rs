//! Basis-set shells reconstructed from checkpoint shell metadata.

/// Angular-momentum type of a shell, distinguishing spherical (pure) from
/// Cartesian component counts for d and higher shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellType {
    S,
    P,
    SphericalD,
    CartesianD,
    SphericalF,
    CartesianF,
    SphericalG,
    CartesianG,
}

impl ShellType {
    /// Conventional basis-set label (component count suffix for d and up).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::P => "P",
            Self::SphericalD => "D5",
            Self::CartesianD => "D6",
            Self::SphericalF => "F7",
            Self::CartesianF => "F10",
            Self::SphericalG => "G9",
            Self::CartesianG => "G15",
        }
    }

    pub const fn angular_momentum(self) -> u32 {
        match self {
            Self::S => 0,
            Self::P => 1,
            Self::SphericalD | Self::CartesianD => 2,
            Self::SphericalF | Self::CartesianF => 3,
            Self::SphericalG | Self::CartesianG => 4,
        }
    }

    pub const fn is_spherical(self) -> bool {
        !matches!(self, Self::CartesianD | Self::CartesianF | Self::CartesianG)
    }

    /// Basis functions contributed by one shell of this type: `2l + 1` for
    /// spherical shells, `(l + 1)(l + 2) / 2` for Cartesian shells.
    pub const fn function_count(self) -> usize {
        match self {
            Self::S => 1,
            Self::P => 3,
            Self::SphericalD => 5,
            Self::CartesianD => 6,
            Self::SphericalF => 7,
            Self::CartesianF => 10,
            Self::SphericalG => 9,
            Self::CartesianG => 15,
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One primitive Gaussian: exponent in inverse Angstrom squared, contraction
/// coefficient unitless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub exponent: f64,
    pub coefficient: f64,
}

/// A contracted shell: one center, one set of primitives, one type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    pub shell_type: ShellType,
    /// Center position in Angstrom, copied from the owning geometry's atom.
    pub center: [f64; 3],
    pub primitives: Vec<Primitive>,
}

impl Shell {
    pub fn function_count(&self) -> usize {
        self.shell_type.function_count()
    }
}

/// Ordered shells of one frame, owned by that frame's orbital record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellList {
    pub shells: Vec<Shell>,
}

impl ShellList {
    pub fn shell_count(&self) -> usize {
        self.shells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }

    /// Total basis functions implied by the shell types, the row dimension of
    /// the molecular-orbital coefficient matrices.
    pub fn basis_function_count(&self) -> usize {
        self.shells.iter().map(Shell::function_count).sum()
    }
}
