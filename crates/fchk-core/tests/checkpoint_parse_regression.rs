use fchk_core::common::constants::{BOHR_TO_ANGSTROM, EXPONENT_BOHR_TO_ANGSTROM};
use fchk_core::data::ShellType;
use fchk_core::domain::Spin;
use fchk_core::{DataBank, parse_checkpoint, parse_checkpoint_file};

fn record_line(key: &str, value: &str) -> String {
    format!("{key:<43}{value}")
}

fn count_header(key: &str, marker: char, count: usize) -> String {
    record_line(key, &format!("{marker}   N={count:>12}"))
}

fn integer_fields(values: &[i64]) -> String {
    values
        .chunks(6)
        .map(|chunk| chunk.iter().map(|v| format!("{v:>12}")).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn packed_doubles(values: &[f64]) -> String {
    values
        .chunks(5)
        .map(|chunk| {
            chunk
                .iter()
                .map(|v| format!("{:>16}", format!("{v:.8E}")))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Orbital-major coefficient block: identity-like with a constant
/// off-diagonal fill, easy to spot-check after the matrix rebuild.
fn coefficient_block(orbitals: usize, basis: usize) -> Vec<f64> {
    (0..orbitals * basis)
        .map(|k| if k % basis == k / basis { 1.0 } else { 0.05 })
        .collect()
}

/// Two-frame water optimization with an STO-3G-like basis: one core S shell
/// and one combined SP shell on oxygen, one S shell per hydrogen. The final
/// frame carries dipole, Hessian, and a total-energy correction.
fn water_optimization() -> String {
    let exponents = [
        130.7, 23.8, 6.44, 5.03, 1.17, 0.38, 3.43, 0.62, 0.17, 3.43, 0.62, 0.17,
    ];
    let coefficients = [
        0.15, 0.53, 0.44, -0.1, 0.4, 0.7, 0.26, 0.53, 0.35, 0.26, 0.53, 0.35,
    ];
    let sp_coefficients = [
        0.0, 0.0, 0.0, 0.16, 0.61, 0.39, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ];
    let hessian: Vec<f64> = (1..=45).map(f64::from).collect();

    [
        "water, optimization".to_string(),
        record_line("Number of alpha electrons", "I                5"),
        record_line("Number of beta electrons", "I                5"),
        count_header("Atomic numbers", 'I', 3),
        integer_fields(&[8, 1, 1]),
        record_line("Number of basis functions", "I                7"),
        count_header("Shell types", 'I', 4),
        integer_fields(&[0, -1, 0, 0]),
        count_header("Number of primitives per shell", 'I', 4),
        integer_fields(&[3, 3, 3, 3]),
        count_header("Shell to atom map", 'I', 4),
        integer_fields(&[1, 1, 2, 3]),
        count_header("Primitive exponents", 'R', 12),
        packed_doubles(&exponents),
        count_header("Contraction coefficients", 'R', 12),
        packed_doubles(&coefficients),
        count_header("P(S=P) Contraction coefficients", 'R', 12),
        packed_doubles(&sp_coefficients),
        // frame 1
        count_header("Current cartesian coordinates", 'R', 9),
        packed_doubles(&[0.0, 0.0, 0.0, 0.0, 1.43, -1.11, 0.0, -1.43, -1.11]),
        record_line("SCF Energy", "R    -7.59830000E+01"),
        count_header("Alpha Orbital Energies", 'R', 7),
        packed_doubles(&[-20.24, -1.27, -0.62, -0.49, -0.44, 0.57, 0.68]),
        count_header("Alpha MO coefficients", 'R', 49),
        packed_doubles(&coefficient_block(7, 7)),
        // frame 2
        count_header("Current cartesian coordinates", 'R', 9),
        packed_doubles(&[0.0, 0.0, 0.0, 0.0, 1.43, -1.09, 0.0, -1.43, -1.09]),
        record_line("SCF Energy", "R    -7.59860000E+01"),
        record_line("Total Energy", "R    -7.59862000E+01"),
        count_header("Dipole_Data", 'R', 3),
        packed_doubles(&[0.0, 0.0, 0.81]),
        count_header("Cartesian Force Constants", 'R', 45),
        packed_doubles(&hessian),
        count_header("Alpha Orbital Energies", 'R', 7),
        packed_doubles(&[-20.25, -1.28, -0.63, -0.5, -0.45, 0.58, 0.69]),
        count_header("Alpha MO coefficients", 'R', 49),
        packed_doubles(&coefficient_block(7, 7)),
    ]
    .join("\n")
}

#[test]
fn water_optimization_publishes_both_frames_with_properties() {
    let outcome = parse_checkpoint(&water_optimization());

    assert!(outcome.success(), "well-formed input should parse cleanly");
    assert!(outcome.diagnostics.is_empty());

    let geometries = outcome.geometries.as_ref().expect("geometries published");
    assert_eq!(geometries.len(), 2);
    assert_eq!(geometries.default_index, None);

    let first = &geometries.items[0];
    let last = &geometries.items[1];
    assert_eq!(first.formula(), "H2O");
    assert_eq!(first.atom_count(), 3);
    assert!((first.positions[1][1] - 1.43 * BOHR_TO_ANGSTROM).abs() < 1.0e-12);
    assert_eq!(first.scf_energy, Some(-75.983));
    assert_eq!(first.total_energy, Some(-75.983));
    assert!(first.dipole_moment.is_none());
    assert!(!first.has_hessian());

    assert_eq!(last.scf_energy, Some(-75.986));
    assert_eq!(last.total_energy, Some(-75.9862));
    assert_eq!(last.dipole_moment, Some([0.0, 0.0, 0.81]));
    let hessian = last.hessian.as_ref().expect("final frame carries a Hessian");
    assert_eq!(hessian.nrows(), 9);
    assert_eq!(hessian.ncols(), 9);
    assert_eq!(hessian[(8, 8)], 45.0);
    assert_eq!(hessian[(7, 2)], hessian[(2, 7)]);
}

#[test]
fn water_optimization_derives_polar_partial_charges() {
    let outcome = parse_checkpoint(&water_optimization());
    let geometries = outcome.geometries.as_ref().expect("geometries published");

    for geometry in &geometries.items {
        let charges = &geometry.partial_charges;
        assert_eq!(charges.len(), 3);
        assert!(charges[0] < 0.0, "oxygen should draw negative charge");
        assert!(charges[1] > 0.0);
        assert!(charges[2] > 0.0);
        assert!((charges[1] - charges[2]).abs() < 1.0e-9, "equivalent hydrogens");
        assert!(geometry.total_charge().abs() < 1.0e-10);
    }
}

#[test]
fn water_optimization_builds_one_orbital_set_per_frame() {
    let outcome = parse_checkpoint(&water_optimization());
    let orbitals = outcome.orbitals.as_ref().expect("orbital sets published");
    assert_eq!(orbitals.len(), 2);

    for set in &orbitals.items {
        assert!(set.is_consistent());
        assert_eq!(set.basis_function_count(), 7);
        assert_eq!(set.electron_count(Spin::Alpha), 5);
        assert_eq!(set.electron_count(Spin::Beta), 5);
        assert_eq!(set.orbital_count(Spin::Alpha), 7);
        assert_eq!(set.orbital_count(Spin::Beta), 7);

        // The combined oxygen shell splits, so four input shells become five.
        assert_eq!(set.shells.shell_count(), 5);
        let types: Vec<ShellType> = set.shells.shells.iter().map(|s| s.shell_type).collect();
        assert_eq!(
            types,
            vec![
                ShellType::S,
                ShellType::S,
                ShellType::P,
                ShellType::S,
                ShellType::S,
            ]
        );

        let core = &set.shells.shells[0];
        assert!((core.primitives[0].exponent - 130.7 * EXPONENT_BOHR_TO_ANGSTROM).abs() < 1.0e-9);
        assert_eq!(core.primitives[0].coefficient, 0.15);

        let split_p = &set.shells.shells[2];
        assert_eq!(split_p.primitives[0].coefficient, 0.16);
        assert_eq!(split_p.center, set.shells.shells[1].center);

        assert_eq!(set.alpha_coefficients[(3, 3)], 1.0);
        assert_eq!(set.alpha_coefficients[(0, 1)], 0.05);
        assert_eq!(
            set.beta_coefficients[(3, 3)],
            1.0,
            "beta should mirror alpha when no beta block is present"
        );
    }

    assert_eq!(orbitals.items[0].energies(Spin::Alpha)[0], -20.24);
    assert_eq!(orbitals.items[1].energies(Spin::Alpha)[0], -20.25);

    let geometries = outcome.geometries.as_ref().expect("geometries published");
    assert_eq!(
        orbitals.items[1].shells.shells[3].center,
        geometries.items[1].positions[1],
        "each frame's shells should sit on that frame's atom positions"
    );
}

#[test]
fn file_entry_point_reads_from_disk() {
    let temp = tempfile::TempDir::new().expect("tempdir should be created");
    let path = temp.path().join("water.fchk");
    std::fs::write(&path, water_optimization()).expect("fixture should be writable");

    let outcome = parse_checkpoint_file(&path).expect("file should be readable");
    assert!(outcome.success());
    assert_eq!(outcome.geometries.expect("geometries published").len(), 2);
}

#[test]
fn missing_file_reports_its_path() {
    let temp = tempfile::TempDir::new().expect("tempdir should be created");
    let path = temp.path().join("absent.fchk");

    let error = parse_checkpoint_file(&path).expect_err("missing file should fail");
    let message = error.to_string();
    assert!(
        message.contains("absent.fchk"),
        "error should name the file, got: {message}"
    );
}

#[test]
fn data_bank_accumulates_across_parse_calls() {
    let mut bank = DataBank::new();

    assert!(bank.load_checkpoint(&water_optimization()));
    assert!(bank.load_checkpoint(&water_optimization()));

    assert_eq!(bank.geometry_lists.len(), 2);
    assert_eq!(bank.orbital_lists.len(), 2);
    assert_eq!(bank.geometry_count(), 4);
    assert_eq!(bank.orbital_set_count(), 4);
}
