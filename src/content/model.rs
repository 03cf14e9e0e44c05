use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{GENETIC_ASSETS_PATH, MAX_TEAM_SIZE, SPICE_ASSETS_PATH, TERRITORY_ASSETS_PATH};
use crate::error::TeamError;
use crate::mechanics::slugify;

/// A trait that shapes how a pet forages.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genetic {
    pub id: u32,
    pub name: String,
}

impl Genetic {
    pub fn icon_path(&self) -> PathBuf {
        PathBuf::from(GENETIC_ASSETS_PATH).join(format!("{}.png", slugify(&self.name)))
    }
}

/// A foraging unit. Power is optional when the team speed is entered by hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub genetic: Genetic,
    #[serde(default)]
    pub power: Option<f64>,
}

impl Pet {
    pub fn new(genetic: Genetic) -> Self {
        Self { genetic, power: None }
    }

    #[must_use]
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = Some(power);
        self
    }
}

/// A spice-producing location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    /// Forage needed for the first fill.
    pub forage: u32,
    pub fight: u32,
}

impl Territory {
    pub fn spice_name(&self) -> String {
        format!("{} Spice", self.name)
    }

    pub fn spice_icon_path(&self) -> PathBuf {
        PathBuf::from(SPICE_ASSETS_PATH).join(format!("{}.png", slugify(&self.spice_name())))
    }

    pub fn background_path(&self) -> PathBuf {
        PathBuf::from(TERRITORY_ASSETS_PATH).join(format!("{}.png", slugify(&self.name)))
    }
}

/// Up to [`MAX_TEAM_SIZE`] pets, optionally pinned to a territory.
///
/// Speed is either entered by hand (`manual_speed`) or the sum of pet powers;
/// in the latter case every pet must carry a power.
#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    name: String,
    pets: Vec<Pet>,
    territory: Option<String>,
    manual_speed: Option<f64>,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        pets: Vec<Pet>,
        territory: Option<String>,
        manual_speed: Option<f64>,
    ) -> Result<Self, TeamError> {
        if pets.len() > MAX_TEAM_SIZE {
            return Err(TeamError::TooManyPets { count: pets.len(), max: MAX_TEAM_SIZE });
        }
        if manual_speed.is_none() && pets.iter().any(|p| p.power.is_none()) {
            return Err(TeamError::MissingPower);
        }
        Ok(Self { name: name.into(), pets, territory, manual_speed })
    }

    /// Team whose speed is entered by hand.
    pub fn with_speed(name: impl Into<String>, pets: Vec<Pet>, speed: f64) -> Result<Self, TeamError> {
        Self::new(name, pets, None, Some(speed))
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn pets(&self) -> &[Pet] { &self.pets }
    pub fn territory(&self) -> Option<&str> { self.territory.as_deref() }
    pub fn size(&self) -> usize { self.pets.len() }

    /// Foraging speed per hour.
    pub fn speed(&self) -> f64 {
        match self.manual_speed {
            Some(speed) => speed,
            None => self.pets.iter().filter_map(|p| p.power).sum(),
        }
    }

    /// Pets on the team carrying the named genetic.
    pub fn count_genetic(&self, name: &str) -> u32 {
        self.pets.iter().filter(|p| p.genetic.name == name).count() as u32
    }

    pub fn genetics_counts(&self) -> BTreeMap<String, u32> {
        let mut counts = BTreeMap::new();
        for pet in &self.pets {
            *counts.entry(pet.genetic.name.clone()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene(id: u32, name: &str) -> Genetic {
        Genetic { id, name: name.into() }
    }

    #[test]
    fn asset_paths_use_slugs() {
        let t = Territory { name: "Tree Interior".into(), forage: 10, fight: 1 };
        assert_eq!(t.spice_name(), "Tree Interior Spice");
        assert_eq!(t.spice_icon_path(), PathBuf::from("assets/spices/Tree_Interior_Spice.png"));
        assert_eq!(t.background_path(), PathBuf::from("assets/territories/Tree_Interior.png"));
        assert_eq!(gene(1, "Alchemic").icon_path(), PathBuf::from("assets/genetics/Alchemic.png"));
    }

    #[test]
    fn speed_is_manual_or_summed() {
        let pets = vec![Pet::new(gene(1, "Borger")).with_power(2.5), Pet::new(gene(2, "Miasma")).with_power(4.0)];
        let summed = Team::new("a", pets.clone(), None, None).unwrap();
        assert_eq!(summed.speed(), 6.5);

        let manual = Team::new("b", pets, None, Some(11.0)).unwrap();
        assert_eq!(manual.speed(), 11.0);
    }

    #[test]
    fn rejects_oversized_and_powerless_teams() {
        let five = vec![Pet::new(gene(1, "Borger")); 5];
        assert_eq!(
            Team::with_speed("big", five, 1.0),
            Err(TeamError::TooManyPets { count: 5, max: 4 })
        );

        let powerless = vec![Pet::new(gene(1, "Borger"))];
        assert_eq!(Team::new("p", powerless, None, None), Err(TeamError::MissingPower));
    }

    #[test]
    fn counts_genetics() {
        let alch = gene(7, "Alchemic");
        let pets = vec![
            Pet::new(alch.clone()),
            Pet::new(alch.clone()),
            Pet::new(alch),
            Pet::new(gene(3, "Converter")),
        ];
        let team = Team::with_speed("Alchemic Team", pets, 3.0).unwrap();
        assert_eq!(team.count_genetic("Alchemic"), 3);
        assert_eq!(team.count_genetic("Monolithic"), 0);
        assert_eq!(team.genetics_counts().get("Converter"), Some(&1));
    }
}
