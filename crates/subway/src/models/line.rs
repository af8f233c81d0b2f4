//! A subway line: identity, display attributes and its section chain.

use std::sync::Arc;

use crate::identifiers::*;
use crate::models::sections::Sections;
use crate::models::types::*;

#[derive(Clone, Debug)]
pub struct Line {
    pub id: LineIdentifier,
    pub name: Arc<str>,
    pub color: Arc<str>,
    sections: Sections,
}

impl Line {
    /// Create a line running from `up_station` to `down_station`
    pub fn new(
        id: impl Into<LineIdentifier>,
        name: impl AsRef<str>,
        color: impl AsRef<str>,
        up_station: Arc<Station>,
        down_station: Arc<Station>,
        distance: u32,
    ) -> Result<Self> {
        let first = Section::new(up_station, down_station, distance)?;
        Ok(Self {
            id: id.into(),
            name: name.as_ref().into(),
            color: color.as_ref().into(),
            sections: Sections::new(first),
        })
    }

    pub fn add_section(
        &mut self,
        up_station: Arc<Station>,
        down_station: Arc<Station>,
        distance: u32,
    ) -> Result<()> {
        self.sections.insert(Section::new(up_station, down_station, distance)?)
    }

    pub fn remove_station(&mut self, station: &Station) -> Result<()> {
        self.sections.remove(station)
    }

    pub fn size(&self) -> usize {
        self.sections.size()
    }

    pub fn sections(&self) -> &[Section] {
        self.sections.sections()
    }

    pub fn stations(&self) -> Vec<Arc<Station>> {
        self.sections.stations()
    }

    pub fn total_distance(&self) -> u64 {
        self.sections.total_distance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_starts_with_one_section() {
        let gangnam = Arc::new(Station::new("2", "강남역"));
        let yeoksam = Arc::new(Station::new("3", "역삼역"));

        let line =
            Line::new("1", "2호선", "green", gangnam.clone(), yeoksam.clone(), 10).unwrap();

        assert_eq!(line.size(), 1);
        assert_eq!(line.stations(), vec![gangnam, yeoksam]);
        assert_eq!(line.total_distance(), 10);
    }

    #[test]
    fn test_line_rejects_invalid_first_section() {
        let gangnam = Arc::new(Station::new("2", "강남역"));

        let result = Line::new("1", "2호선", "green", gangnam.clone(), gangnam, 10);

        assert!(matches!(result, Err(SubwayError::InvalidSection(_))));
    }

    #[test]
    fn test_zero_distance_section_is_rejected_before_the_chain() {
        let gangnam = Arc::new(Station::new("2", "강남역"));
        let yeoksam = Arc::new(Station::new("3", "역삼역"));
        let samseong = Arc::new(Station::new("5", "삼성역"));
        let mut line = Line::new("1", "2호선", "green", gangnam, yeoksam.clone(), 10).unwrap();

        let result = line.add_section(yeoksam, samseong, 0);

        assert!(matches!(result, Err(SubwayError::InvalidSection(_))));
        assert_eq!(line.size(), 1);
    }
}
