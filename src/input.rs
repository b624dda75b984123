//! Text batch format.
//!
//! ```text
//! base_cost package_count
//! id weight distance [offer_code]      (package_count lines)
//! vehicle_count max_speed max_carriable_weight   (optional)
//! ```
//!
//! Tokens are whitespace separated and blank lines are skipped. Errors carry
//! the 1-based line number they were found on.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::{InputError, InputErrorKind};
use crate::models::Package;
use crate::planner::PlanConfig;

/// A parsed batch: pricing base, packages in input order, optional fleet.
#[derive(Debug, Clone)]
pub struct Batch {
    pub base_cost: u64,
    pub packages: Vec<Package>,
    pub fleet: Option<PlanConfig>,
    end_line: usize,
}

impl Batch {
    /// Creates a batch from parts.
    pub fn new(base_cost: u64, packages: Vec<Package>, fleet: Option<PlanConfig>) -> Self {
        let end_line = packages.len() + 2 + usize::from(fleet.is_some());
        Self {
            base_cost,
            packages,
            fleet,
            end_line,
        }
    }

    /// The fleet line, required for time estimation.
    pub fn require_fleet(&self) -> Result<PlanConfig, InputError> {
        self.fleet
            .ok_or_else(|| InputError::new(self.end_line, InputErrorKind::MissingFleet))
    }

    /// Writes the batch back out in the text format.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_courier::input::Batch;
    ///
    /// let text = "100 1\nPKG1 5 5 OFR001\n";
    /// let batch: Batch = text.parse().unwrap();
    /// assert_eq!(batch.to_text(), text);
    /// ```
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.base_cost, self.packages.len());
        for p in &self.packages {
            let _ = write!(out, "{} {} {}", p.id(), p.weight(), p.distance());
            if !p.offer_code().is_empty() {
                let _ = write!(out, " {}", p.offer_code());
            }
            out.push('\n');
        }
        if let Some(fleet) = &self.fleet {
            let _ = writeln!(
                out,
                "{} {} {}",
                fleet.vehicle_count, fleet.speed, fleet.capacity
            );
        }
        out
    }
}

impl FromStr for Batch {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_batch(s)
    }
}

/// Parses a batch.
///
/// # Examples
///
/// ```
/// use u_courier::input::parse_batch;
///
/// let batch = parse_batch("100 2\nPKG1 50 30 OFR001\nPKG2 75 125\n2 70 200\n").unwrap();
/// assert_eq!(batch.base_cost, 100);
/// assert_eq!(batch.packages.len(), 2);
/// assert_eq!(batch.packages[1].offer_code(), "");
/// let fleet = batch.fleet.unwrap();
/// assert_eq!((fleet.vehicle_count, fleet.speed, fleet.capacity), (2, 70, 200));
/// ```
pub fn parse_batch(text: &str) -> Result<Batch, InputError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty());
    let end_line = text.lines().count() + 1;

    let (base_cost, expected) = match lines.next() {
        Some((line, tokens)) if tokens.len() == 2 => (
            number::<u64>(line, tokens[0])?,
            number::<usize>(line, tokens[1])?,
        ),
        Some((line, _)) => return Err(InputError::new(line, InputErrorKind::MissingHeader)),
        None => return Err(InputError::new(end_line, InputErrorKind::MissingHeader)),
    };

    // the header count is untrusted; never size by it alone
    let mut packages = Vec::with_capacity(expected.min(end_line));
    while packages.len() < expected {
        let Some((line, tokens)) = lines.next() else {
            return Err(InputError::new(
                end_line,
                InputErrorKind::PackageCount {
                    expected,
                    found: packages.len(),
                },
            ));
        };
        if !(3..=4).contains(&tokens.len()) {
            return Err(InputError::new(line, InputErrorKind::MalformedPackage));
        }
        let weight = number::<u32>(line, tokens[1])?;
        let distance = number::<u32>(line, tokens[2])?;
        let offer_code = tokens.get(3).copied().unwrap_or("");
        let package = Package::new(tokens[0], weight, distance, offer_code)
            .map_err(|e| InputError::new(line, e.into()))?;
        packages.push(package);
    }

    let fleet = match lines.next() {
        Some((line, tokens)) if tokens.len() == 3 => Some(PlanConfig {
            vehicle_count: number(line, tokens[0])?,
            speed: number(line, tokens[1])?,
            capacity: number(line, tokens[2])?,
        }),
        Some((line, _)) => return Err(InputError::new(line, InputErrorKind::MalformedFleet)),
        None => None,
    };

    if let Some((line, _)) = lines.next() {
        return Err(InputError::new(line, InputErrorKind::TrailingContent));
    }

    Ok(Batch {
        base_cost,
        packages,
        fleet,
        end_line,
    })
}

fn number<T: FromStr>(line: usize, token: &str) -> Result<T, InputError> {
    token
        .parse()
        .map_err(|_| InputError::new(line, InputErrorKind::BadNumber(token.to_string())))
}
