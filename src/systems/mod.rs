#[cfg(feature="system-allocation")]  pub mod allocation;
#[cfg(feature="system-forage_race")] pub mod forage_race;
