//! Conversion par lot d'un fichier texte, une coordonnée par ligne
//!
//! Les lignes sont converties en parallèle avec rayon ; une ligne en erreur
//! n'interrompt pas le lot.

use bmn::{BmnCoord, BmnError, GeodeticPoint, Meridian, Wgs84};
use rayon::prelude::*;
use thiserror::Error;

/// Sens de conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    /// Lignes `M31 450000 350000` → `lat long height`
    ToWgs84,
    /// Lignes `lat long [height [méridien]]` → `M31 450000 350000`
    ToBmn,
}

/// Erreur sur une ligne du lot
#[derive(Debug, Error)]
pub enum LineError {
    #[error(transparent)]
    Bmn(#[from] BmnError),

    #[error("Expected 'lat long [height [meridian]]', found {0} fields")]
    FieldCount(usize),

    #[error("Invalid number '{0}'")]
    Number(String),
}

/// Résultat d'un lot
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Lignes converties (numéro de ligne, sortie)
    pub converted: Vec<(usize, String)>,
    /// Lignes en erreur (numéro de ligne, message)
    pub failures: Vec<(usize, String)>,
    /// Lignes vides ou commentaires
    pub skipped: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failures.len() + self.skipped
    }

    /// Sortie texte, une ligne par coordonnée convertie
    pub fn output(&self) -> String {
        let mut out = String::new();
        for (_, line) in &self.converted {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Convertit toutes les lignes d'un texte
pub fn convert_lines(input: &str, direction: Direction) -> BatchReport {
    let mut skipped = 0;
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| {
            let keep = !line.is_empty() && !line.starts_with('#');
            if !keep {
                skipped += 1;
            }
            keep
        })
        .collect();

    let results: Vec<(usize, Result<String, LineError>)> = lines
        .into_par_iter()
        .map(|(n, line)| (n, convert_line(line, direction)))
        .collect();

    let mut report = BatchReport {
        skipped,
        ..Default::default()
    };
    for (n, result) in results {
        match result {
            Ok(out) => report.converted.push((n, out)),
            Err(e) => report.failures.push((n, e.to_string())),
        }
    }
    report
}

/// Convertit une ligne
pub fn convert_line(line: &str, direction: Direction) -> Result<String, LineError> {
    match direction {
        Direction::ToWgs84 => {
            let coord = BmnCoord::parse(line)?;
            let p = bmn::to_geodetic(&coord)?;
            Ok(format!("{:.9} {:.9} {:.3}", p.lat, p.long, p.height))
        }
        Direction::ToBmn => {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if !(2..=4).contains(&fields.len()) {
                return Err(LineError::FieldCount(fields.len()));
            }

            let lat = parse_f64(fields[0])?;
            let long = parse_f64(fields[1])?;
            let height = fields.get(2).map(|s| parse_f64(s)).transpose()?.unwrap_or(0.0);
            let meridian = fields
                .get(3)
                .map(|s| s.parse::<Meridian>())
                .transpose()?;

            let p = GeodeticPoint::<Wgs84>::new(lat, long, height);
            Ok(bmn::to_grid(&p, meridian)?.to_string())
        }
    }
}

fn parse_f64(s: &str) -> Result<f64, LineError> {
    s.parse().map_err(|_| LineError::Number(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wgs84_lines() {
        let input = "# BMN\nM31 450000 350000\n\nM99 1 2\nm34 753020.835 341104.125\n";
        let report = convert_lines(input, Direction::ToWgs84);

        assert_eq!(report.skipped, 2);
        assert_eq!(report.total(), 5);
        assert_eq!(report.converted.len(), 2);
        assert_eq!(report.converted[0].0, 2);
        assert!(report.converted[0].1.starts_with("48.28824"), "{}", report.converted[0].1);
        assert_eq!(report.converted[1].0, 5);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, 4);
        assert!(report.failures[0].1.contains("M99"), "{}", report.failures[0].1);
    }

    #[test]
    fn test_to_bmn_lines() {
        let input = "48.208333 16.372778\n47.26543 11.392769 0 M31\n48.85 2.35\nabc 16\n1 2 3 M28 x\n";
        let report = convert_lines(input, Direction::ToBmn);

        assert_eq!(report.converted.len(), 2);
        assert_eq!(report.converted[0].1, "M34 753020.835 341104.125");
        assert!(report.converted[1].1.starts_with("M31 "), "{}", report.converted[1].1);

        let lines: Vec<usize> = report.failures.iter().map(|(n, _)| *n).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert!(report.failures[1].1.contains("abc"));
    }

    #[test]
    fn test_output_keeps_order() {
        let input: String = (0..200)
            .map(|i| format!("M28 {} 250000\n", 100000 + i * 100))
            .collect();
        let report = convert_lines(&input, Direction::ToWgs84);

        let numbers: Vec<usize> = report.converted.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, (1..=200).collect::<Vec<_>>());
        assert_eq!(report.output().lines().count(), 200);
    }
}
