//! Application layer: identifier resolution on top of lines and path search.
//!
//! Every operation resolves the identifiers it is given through the provider
//! first, so a missing station or line is reported before any line changes.

use std::sync::Arc;

use api_types::{LineRequest, LineResponse, PathResponse, SectionRequest, StationResponse};
use tracing::info;

use crate::identifiers::*;
use crate::models::{line::Line, traits::*, types::*};
use crate::path::{DijkstraPathFinder, PathFinder};

pub struct SubwayService<P> {
    provider: P,
}

impl<P> SubwayService<P>
where
    P: StationResolver + LineRepository,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    // ---- Lines ----

    pub fn create_line(
        &mut self,
        id: LineIdentifier,
        request: &LineRequest,
    ) -> Result<LineResponse> {
        let up = self.find_station(&request.up_station_id.as_str().into())?;
        let down = self.find_station(&request.down_station_id.as_str().into())?;
        let line = Line::new(
            id.clone(),
            &request.name,
            &request.color,
            up,
            down,
            request.distance,
        )?;
        self.provider.insert_line(line)?;
        self.line_response(&id)
    }

    pub fn delete_line(&mut self, id: &LineIdentifier) -> Result<()> {
        self.provider
            .remove_line(id)
            .map(|_| ())
            .ok_or_else(|| SubwayError::LineNotFound(id.clone()))
    }

    pub fn find_line(&self, id: &LineIdentifier) -> Result<&Line> {
        self.provider
            .get_line(id)
            .ok_or_else(|| SubwayError::LineNotFound(id.clone()))
    }

    pub fn line_response(&self, id: &LineIdentifier) -> Result<LineResponse> {
        self.find_line(id).map(line_response)
    }

    pub fn all_line_responses(&self) -> Vec<LineResponse> {
        self.provider.all_lines().into_iter().map(line_response).collect()
    }

    // ---- Sections ----

    pub fn add_section(
        &mut self,
        line_id: &LineIdentifier,
        request: &SectionRequest,
    ) -> Result<()> {
        let up = self.find_station(&request.up_station_id.as_str().into())?;
        let down = self.find_station(&request.down_station_id.as_str().into())?;
        let line = self.find_line_mut(line_id)?;

        line.add_section(up.clone(), down.clone(), request.distance)?;
        info!(
            line = %line_id,
            up = %up.id,
            down = %down.id,
            distance = request.distance,
            "added section"
        );
        Ok(())
    }

    pub fn remove_section(
        &mut self,
        line_id: &LineIdentifier,
        station_id: &StationIdentifier,
    ) -> Result<()> {
        let station = self.find_station(station_id)?;
        let line = self.find_line_mut(line_id)?;

        line.remove_station(&station)?;
        info!(line = %line_id, station = %station.id, "removed station from line");
        Ok(())
    }

    // ---- Paths ----

    pub fn find_path(
        &self,
        source_id: &StationIdentifier,
        target_id: &StationIdentifier,
    ) -> Result<PathResponse> {
        let source = self.find_station(source_id)?;
        let target = self.find_station(target_id)?;

        let path = DijkstraPathFinder::new(&self.provider).shortest_path(&source, &target)?;
        Ok(PathResponse {
            stations: path.stations.iter().map(|s| station_response(s)).collect(),
            distance: path.distance,
        })
    }

    fn find_station(&self, id: &StationIdentifier) -> Result<Arc<Station>> {
        self.provider
            .get_station(id)
            .ok_or_else(|| SubwayError::StationNotFound(id.clone()))
    }

    fn find_line_mut(&mut self, id: &LineIdentifier) -> Result<&mut Line> {
        self.provider
            .get_line_mut(id)
            .ok_or_else(|| SubwayError::LineNotFound(id.clone()))
    }
}

fn station_response(station: &Station) -> StationResponse {
    StationResponse {
        id: station.id.to_string(),
        name: station.name.to_string(),
    }
}

fn line_response(line: &Line) -> LineResponse {
    LineResponse {
        id: line.id.to_string(),
        name: line.name.to_string(),
        color: line.color.to_string(),
        stations: line.stations().iter().map(|s| station_response(s)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use api_types::ErrorKind;

    use super::*;
    use crate::provider::InMemorySubwayProvider;

    const LINE_TWO: &str = "1";

    /// Line 2: 강남역(2) -> 역삼역(3), distance 10, plus three unattached stations
    fn service() -> SubwayService<InMemorySubwayProvider> {
        let mut provider = InMemorySubwayProvider::new();
        let stations = [
            ("1", "교대역"),
            ("2", "강남역"),
            ("3", "역삼역"),
            ("4", "선릉역"),
            ("5", "삼성역"),
        ];
        for (id, name) in stations {
            provider.add_station(Station::new(id, name));
        }
        let mut service = SubwayService::new(provider);
        let request = LineRequest {
            name: "2호선".into(),
            color: "green".into(),
            up_station_id: "2".into(),
            down_station_id: "3".into(),
            distance: 10,
        };
        service.create_line(LINE_TWO.into(), &request).unwrap();
        service
    }

    fn station_names(service: &SubwayService<InMemorySubwayProvider>) -> Vec<String> {
        service
            .line_response(&LINE_TWO.into())
            .unwrap()
            .stations
            .into_iter()
            .map(|s| s.name)
            .collect()
    }

    #[test]
    fn test_add_and_remove_sections_by_id() {
        let mut service = service();
        let line: LineIdentifier = LINE_TWO.into();

        service.add_section(&line, &SectionRequest::new("3", "5", 1)).unwrap();
        assert_eq!(service.find_line(&line).unwrap().size(), 2);
        assert_eq!(station_names(&service), ["강남역", "역삼역", "삼성역"]);

        service.add_section(&line, &SectionRequest::new("1", "2", 1)).unwrap();
        assert_eq!(service.find_line(&line).unwrap().size(), 3);
        assert_eq!(station_names(&service), ["교대역", "강남역", "역삼역", "삼성역"]);

        service.remove_section(&line, &"3".into()).unwrap();
        let merged = service.find_line(&line).unwrap();
        assert_eq!(merged.size(), 2);
        assert_eq!(merged.sections()[1].distance().get(), 11);
        assert_eq!(station_names(&service), ["교대역", "강남역", "삼성역"]);
    }

    #[test]
    fn test_unknown_station_id() {
        let mut service = service();

        let err = service
            .add_section(&LINE_TWO.into(), &SectionRequest::new("3", "99", 1))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::StationNotFound);
        assert_eq!(service.find_line(&LINE_TWO.into()).unwrap().size(), 1);
    }

    #[test]
    fn test_unknown_line_id() {
        let mut service = service();

        let err = service.remove_section(&"42".into(), &"2".into()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::LineNotFound);
        assert!(matches!(service.delete_line(&"42".into()), Err(SubwayError::LineNotFound(_))));
    }

    #[test]
    fn test_chain_errors_keep_their_kind() {
        let mut service = service();
        let line: LineIdentifier = LINE_TWO.into();

        let duplicate = service.add_section(&line, &SectionRequest::new("3", "2", 1)).unwrap_err();
        let detached = service.add_section(&line, &SectionRequest::new("1", "5", 1)).unwrap_err();
        let too_long = service.add_section(&line, &SectionRequest::new("4", "3", 10)).unwrap_err();
        let only_section = service.remove_section(&line, &"2".into()).unwrap_err();

        assert_eq!(duplicate.kind(), ErrorKind::SectionAlreadyRegistered);
        assert_eq!(detached.kind(), ErrorKind::SectionNotSearched);
        assert_eq!(too_long.kind(), ErrorKind::InvalidDistance);
        assert_eq!(only_section.kind(), ErrorKind::EmptyLine);
    }

    #[test]
    fn test_find_path_across_lines() {
        let mut service = service();
        service
            .add_section(&LINE_TWO.into(), &SectionRequest::new("3", "5", 10))
            .unwrap();
        let shortcut = LineRequest {
            name: "9호선".into(),
            color: "gold".into(),
            up_station_id: "2".into(),
            down_station_id: "5".into(),
            distance: 5,
        };
        service.create_line("9".into(), &shortcut).unwrap();

        let path = service.find_path(&"2".into(), &"5".into()).unwrap();

        let ids: Vec<_> = path.stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["2", "5"]);
        assert_eq!(path.distance, 5);
    }

    #[test]
    fn test_find_path_errors() {
        let service = service();

        let same = service.find_path(&"2".into(), &"2".into()).unwrap_err();
        let unreachable = service.find_path(&"2".into(), &"4".into()).unwrap_err();
        let unknown = service.find_path(&"2".into(), &"99".into()).unwrap_err();

        assert_eq!(same.kind(), ErrorKind::InvalidSourceTarget);
        assert_eq!(unreachable.kind(), ErrorKind::PathNotFound);
        assert_eq!(unknown.kind(), ErrorKind::StationNotFound);
    }

    #[test]
    fn test_create_and_delete_line() {
        let mut service = service();
        let request = LineRequest {
            name: "2호선".into(),
            color: "green".into(),
            up_station_id: "4".into(),
            down_station_id: "5".into(),
            distance: 3,
        };

        let err = service.create_line(LINE_TWO.into(), &request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LineAlreadyExists);

        let created = service.create_line("3".into(), &request).unwrap();
        assert_eq!(created.stations.len(), 2);
        assert_eq!(service.all_line_responses().len(), 2);

        service.delete_line(&"3".into()).unwrap();
        assert_eq!(service.all_line_responses().len(), 1);
    }
}
