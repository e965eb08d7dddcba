//! Campus navigator client
//!
//! [`NavigatorClient`] is the seam callers program against.
//! [`HttpNavigatorClient`] implements it on top of `reqwest`, running every
//! answer through [`decode_response`](crate::decode_response).

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::{GeoCoordinate, RouteMode};
use futures::{StreamExt, future, stream};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

#[cfg(test)]
use mockall::automock;

use crate::config::NavigatorConfig;
use crate::encoding::{decode_response, status_message};
use crate::error::NavigatorError;
use crate::models::{
    BuildingAccessibility, BuildingComplex, CanteenMenu, DataHash, Floor, Login, PublicTransport,
    RoomAccessibility, RoomInfo, Route, Search, Timetable,
};
use crate::request::Endpoint;
use crate::tiles::{ZoomLevel, floorplan_tile_url};

/// Operations offered by the campus navigator
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NavigatorClient: Send + Sync {
    /// Every building complex on campus
    async fn fetch_buildings(&self) -> Result<Vec<BuildingComplex>, NavigatorError>;

    /// Version hash of the building data
    async fn fetch_data_hash(&self) -> Result<DataHash, NavigatorError>;

    /// Floor plans of a building, e.g. `"apb"`
    async fn fetch_floors(&self, building: &str) -> Result<Vec<Floor>, NavigatorError>;

    /// Accessibility summary of a building
    async fn fetch_building_accessibility(
        &self,
        building: &str,
    ) -> Result<BuildingAccessibility, NavigatorError>;

    /// Room details including accessibility badge and doorplate, e.g. `"542100.2230"`
    async fn fetch_room_info(&self, room: &str) -> Result<RoomInfo, NavigatorError>;

    /// Detailed accessibility survey of a room
    async fn fetch_room_accessibility(
        &self,
        room: &str,
    ) -> Result<RoomAccessibility, NavigatorError>;

    /// Two week occupancy of a room
    async fn fetch_timetable(&self, room: &str) -> Result<Timetable, NavigatorError>;

    /// Route between two coordinates
    async fn fetch_route(
        &self,
        origin: GeoCoordinate,
        destination: GeoCoordinate,
        mode: RouteMode,
    ) -> Result<Route, NavigatorError>;

    /// Free text search over buildings and rooms
    async fn search(&self, query: &str) -> Result<Search, NavigatorError>;

    /// Today's menu of a canteen, see [`CANTEENS`](crate::CANTEENS)
    async fn fetch_canteen_menu(&self, canteen: &str) -> Result<CanteenMenu, NavigatorError>;

    /// Upcoming public transport departures at a stop
    async fn fetch_departures(&self, stop: &str) -> Result<PublicTransport, NavigatorError>;

    /// Exchange ZIH credentials for a token
    async fn login(&self, login: &str, password: &str) -> Result<Login, NavigatorError>;

    /// Check a previously issued token
    async fn login_with_token(&self, token: &str) -> Result<Login, NavigatorError>;

    /// URLs of the floorplan tiles that exist for a floor at the given zoom
    async fn probe_floorplan_tiles(
        &self,
        building: &str,
        floor: i32,
        zoom: ZoomLevel,
    ) -> Result<Vec<Url>, NavigatorError>;
}

/// Building list together with the hash it was fetched at
#[derive(Debug, Clone)]
pub struct BuildingsUpdate {
    /// Hash to pass as `previous_hash` next time
    pub hash: String,
    /// Every building complex at that hash
    pub buildings: Vec<BuildingComplex>,
}

/// Fetch all buildings unless the data hash still equals `previous_hash`
///
/// Returns `Ok(None)` when nothing changed.
///
/// # Errors
///
/// Propagates any error from fetching the hash or the buildings.
pub async fn fetch_buildings_if_changed<C: NavigatorClient + ?Sized>(
    client: &C,
    previous_hash: Option<&str>,
) -> Result<Option<BuildingsUpdate>, NavigatorError> {
    let DataHash { hash, .. } = client.fetch_data_hash().await?;
    if previous_hash == Some(hash.as_str()) {
        debug!(%hash, "Building data unchanged");
        return Ok(None);
    }

    let buildings = client.fetch_buildings().await?;
    debug!(%hash, count = buildings.len(), "Building data changed");
    Ok(Some(BuildingsUpdate { hash, buildings }))
}

/// `reqwest` based navigator client
#[derive(Debug)]
pub struct HttpNavigatorClient {
    client: Client,
    config: NavigatorConfig,
    base_url: Url,
}

impl HttpNavigatorClient {
    /// Create a new navigator client
    ///
    /// # Errors
    ///
    /// Returns `NavigatorError::ConfigurationError` if the configuration is
    /// invalid or the HTTP client cannot be initialized.
    pub fn new(config: &NavigatorConfig) -> Result<Self, NavigatorError> {
        config.validate().map_err(NavigatorError::ConfigurationError)?;
        let base_url = config.base_url()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| NavigatorError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            base_url,
        })
    }

    /// Base URL every request is resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn transport_error(&self, e: &reqwest::Error) -> NavigatorError {
        if e.is_timeout() {
            NavigatorError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            NavigatorError::ResponseUnreadable(e.to_string())
        }
    }

    /// Send the request for `endpoint` and decode the answer as `T`
    async fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, NavigatorError> {
        let request = endpoint.request(&self.base_url)?;
        debug!(method = %request.method, url = %request.url, "Sending navigator request");

        let mut builder = self.client.request(request.method, request.url);
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = status_message(&body, request.encoding);
            warn!(%status, ?message, "Navigator returned an error status");
            return Err(NavigatorError::ServerStatus {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;
        if bytes.is_empty() {
            return Err(NavigatorError::ResponseUnreadable(
                "empty response body".to_string(),
            ));
        }

        decode_response(&bytes, request.encoding)
    }

    /// True if a GET for `url` answers with a success status
    async fn tile_exists(&self, url: &Url) -> bool {
        match self.client.get(url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(%url, error = %e, "Tile probe failed");
                false
            }
        }
    }
}

#[async_trait]
impl NavigatorClient for HttpNavigatorClient {
    #[instrument(skip(self))]
    async fn fetch_buildings(&self) -> Result<Vec<BuildingComplex>, NavigatorError> {
        let buildings: Vec<BuildingComplex> = self.execute(Endpoint::AllBuildings).await?;
        debug!(count = buildings.len(), "Buildings fetched");
        Ok(buildings)
    }

    #[instrument(skip(self))]
    async fn fetch_data_hash(&self) -> Result<DataHash, NavigatorError> {
        self.execute(Endpoint::DataHash).await
    }

    #[instrument(skip(self))]
    async fn fetch_floors(&self, building: &str) -> Result<Vec<Floor>, NavigatorError> {
        let floors: Vec<Floor> = self.execute(Endpoint::Floors { building }).await?;
        debug!(count = floors.len(), "Floors fetched");
        Ok(floors)
    }

    #[instrument(skip(self))]
    async fn fetch_building_accessibility(
        &self,
        building: &str,
    ) -> Result<BuildingAccessibility, NavigatorError> {
        self.execute(Endpoint::BuildingAccessibility { building })
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_room_info(&self, room: &str) -> Result<RoomInfo, NavigatorError> {
        self.execute(Endpoint::RoomInfo { room }).await
    }

    #[instrument(skip(self))]
    async fn fetch_room_accessibility(
        &self,
        room: &str,
    ) -> Result<RoomAccessibility, NavigatorError> {
        self.execute(Endpoint::RoomAccessibility { room }).await
    }

    #[instrument(skip(self))]
    async fn fetch_timetable(&self, room: &str) -> Result<Timetable, NavigatorError> {
        self.execute(Endpoint::Timetable { room }).await
    }

    #[instrument(skip(self))]
    async fn fetch_route(
        &self,
        origin: GeoCoordinate,
        destination: GeoCoordinate,
        mode: RouteMode,
    ) -> Result<Route, NavigatorError> {
        let route: Route = self
            .execute(Endpoint::Route {
                origin,
                destination,
                mode,
            })
            .await?;
        debug!(
            length = route.length,
            steps = route.instructions.len(),
            "Route found"
        );
        Ok(route)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Search, NavigatorError> {
        let search: Search = self.execute(Endpoint::Search { query }).await?;
        debug!(
            buildings = search.building_results.len(),
            rooms = search.room_results.len(),
            "Search finished"
        );
        Ok(search)
    }

    #[instrument(skip(self))]
    async fn fetch_canteen_menu(&self, canteen: &str) -> Result<CanteenMenu, NavigatorError> {
        self.execute(Endpoint::CanteenMenu { canteen }).await
    }

    #[instrument(skip(self))]
    async fn fetch_departures(&self, stop: &str) -> Result<PublicTransport, NavigatorError> {
        let transport: PublicTransport = self.execute(Endpoint::Departures { stop }).await?;
        debug!(count = transport.departures.len(), "Departures fetched");
        Ok(transport)
    }

    #[instrument(skip(self, password))]
    async fn login(&self, login: &str, password: &str) -> Result<Login, NavigatorError> {
        self.execute(Endpoint::LoginWithPassword { login, password })
            .await
    }

    #[instrument(skip_all)]
    async fn login_with_token(&self, token: &str) -> Result<Login, NavigatorError> {
        self.execute(Endpoint::LoginWithToken { token }).await
    }

    #[instrument(skip(self))]
    async fn probe_floorplan_tiles(
        &self,
        building: &str,
        floor: i32,
        zoom: ZoomLevel,
    ) -> Result<Vec<Url>, NavigatorError> {
        let candidates = zoom
            .grid()
            .map(|(x, y)| {
                floorplan_tile_url(&self.base_url, building, floor, x, y, zoom)
                    .map(|url| ((x, y), url))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total = candidates.len();

        let mut found: Vec<((u32, u32), Url)> = stream::iter(candidates)
            .map(|(position, url)| async move {
                self.tile_exists(&url).await.then_some((position, url))
            })
            .buffer_unordered(self.config.tile_probe_concurrency)
            .filter_map(future::ready)
            .collect()
            .await;
        found.sort_by_key(|(position, _)| *position);

        debug!(found = found.len(), total, "Floorplan tiles probed");
        Ok(found.into_iter().map(|(_, url)| url).collect())
    }
}
