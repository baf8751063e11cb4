//! Form controller.
//!
//! Owns the four form fields, the selected point and the single map marker,
//! and keeps them consistent with each other across the four user actions:
//! clicking the map, committing a location name, committing a coordinate
//! field, and submitting for sizing.
//!
//! Each network-backed action comes in two halves. `begin_*` applies the
//! synchronous part of the action and returns a pending request carrying a
//! sequence ticket; `finish_*` applies the response if the ticket is still
//! current. The `async` methods ([`FormController::click_map`] and friends)
//! run both halves against the controller's own sources. Hosts that want to
//! keep several requests in flight drive the halves themselves.

use crate::policy::{self, Failure, Fallback, Notice, Transition, INVALID_INPUT_ALERT};
use crate::sequence::{RequestSequence, Ticket};
use crate::sizing::{PowerRequest, SizingReport};
use crate::sources::{Geocoder, IrradianceSource};
use serde::Serialize;
use solarsite_api_client::ApiResult;
use solarsite_geo::{parse_coordinate, parse_number, Coordinate, MapView, DEFAULT_ZOOM};
use tracing::debug;

/// Raw text of the four form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub latitude: String,
    pub longitude: String,
    pub location: String,
    pub power_kwh: String,
}

/// A reverse lookup that has been issued but not yet applied.
#[derive(Debug, Clone, Copy)]
#[must_use = "pass to finish_reverse_lookup once the geocoder answers"]
pub struct ReverseLookup {
    ticket: Ticket,
    transition: Transition,
    /// Point to look up
    pub at: Coordinate,
}

/// A forward lookup that has been issued but not yet applied.
#[derive(Debug, Clone)]
#[must_use = "pass to finish_forward_lookup once the geocoder answers"]
pub struct ForwardLookup {
    ticket: Ticket,
    /// Text to search for
    pub query: String,
}

/// A sizing submission waiting on irradiance data.
#[derive(Debug, Clone, Copy)]
#[must_use = "pass to finish_submit once irradiance data arrives"]
pub struct SizingRequest {
    ticket: Ticket,
    /// Site to fetch irradiance for
    pub at: Coordinate,
    /// Energy the user asked for
    pub power: PowerRequest,
}

/// Mediates between the form fields, the map and the data sources.
pub struct FormController<M: MapView, G, S> {
    map: M,
    geocoder: G,
    irradiance: S,
    zoom: u8,
    fields: FormFields,
    selected: Option<Coordinate>,
    marker: Option<M::Marker>,
    coordinates_seq: RequestSequence,
    location_seq: RequestSequence,
    report_seq: RequestSequence,
}

impl<M: MapView, G: Geocoder, S: IrradianceSource> FormController<M, G, S> {
    pub fn new(map: M, geocoder: G, irradiance: S) -> Self {
        Self {
            map,
            geocoder,
            irradiance,
            zoom: DEFAULT_ZOOM,
            fields: FormFields::default(),
            selected: None,
            marker: None,
            coordinates_seq: RequestSequence::new(),
            location_seq: RequestSequence::new(),
            report_seq: RequestSequence::new(),
        }
    }

    /// Zoom level used whenever the controller recentres the map.
    #[must_use]
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// The last point derived from any input channel.
    pub fn selected_point(&self) -> Option<Coordinate> {
        self.selected
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    /// Edits the power field without submitting.
    pub fn set_power_text(&mut self, text: impl Into<String>) {
        self.fields.power_kwh = text.into();
    }

    /// Edits the latitude field without committing.
    pub fn set_latitude_text(&mut self, text: impl Into<String>) {
        self.fields.latitude = text.into();
    }

    /// Edits the longitude field without committing.
    pub fn set_longitude_text(&mut self, text: impl Into<String>) {
        self.fields.longitude = text.into();
    }

    // -------------------------------------------------------------------------
    // Map click
    // -------------------------------------------------------------------------

    /// Moves the selection to a clicked point and issues a reverse lookup.
    pub fn begin_map_click(&mut self, at: Coordinate) -> ReverseLookup {
        let at = at.wrapped();
        debug!(%at, "Map clicked");

        self.coordinates_seq.invalidate();
        self.select(at);
        self.write_coordinate_fields(at);

        ReverseLookup {
            ticket: self.location_seq.issue(),
            transition: Transition::MapClick,
            at,
        }
    }

    /// Applies a reverse lookup result to the location field.
    pub fn finish_reverse_lookup(
        &mut self,
        pending: ReverseLookup,
        result: ApiResult<Option<String>>,
    ) -> Option<Notice> {
        if !self.location_seq.is_current(pending.ticket) {
            debug!(at = %pending.at, "Discarding stale reverse lookup");
            return None;
        }

        let failure = match result {
            Ok(Some(name)) => {
                self.fields.location = name;
                return None;
            }
            Ok(None) => policy::fallback(pending.transition, Failure::NotFound),
            Err(ref err) => policy::fallback(pending.transition, Failure::Api(err)),
        };

        match failure {
            Fallback::Label { text, notice } => {
                self.fields.location = text.to_string();
                Some(notice)
            }
            Fallback::Notice(notice) => Some(notice),
            Fallback::Silent => None,
        }
    }

    /// Handles a map click end to end.
    pub async fn click_map(&mut self, at: Coordinate) -> Option<Notice> {
        let pending = self.begin_map_click(at);
        let result = self.geocoder.reverse(pending.at).await;
        self.finish_reverse_lookup(pending, result)
    }

    // -------------------------------------------------------------------------
    // Location name commit
    // -------------------------------------------------------------------------

    /// Records the committed location text and issues a forward lookup.
    ///
    /// A blank query is rejected without a network call.
    pub fn begin_location_commit(&mut self, text: impl Into<String>) -> Result<ForwardLookup, Notice> {
        self.fields.location = text.into();
        self.location_seq.invalidate();

        let query = self.fields.location.trim().to_string();
        if query.is_empty() {
            return match policy::fallback(Transition::LocationCommit, Failure::NotFound) {
                Fallback::Notice(notice) => Err(notice),
                _ => Err(Notice::alert(policy::LOCATION_NOT_FOUND_ALERT)),
            };
        }

        Ok(ForwardLookup {
            ticket: self.coordinates_seq.issue(),
            query,
        })
    }

    /// Applies a forward lookup result to the selection, fields, view and marker.
    pub fn finish_forward_lookup(
        &mut self,
        pending: ForwardLookup,
        result: ApiResult<Option<Coordinate>>,
    ) -> Option<Notice> {
        if !self.coordinates_seq.is_current(pending.ticket) {
            debug!(query = %pending.query, "Discarding stale forward lookup");
            return None;
        }

        let failure = match result {
            Ok(Some(at)) => {
                self.select(at);
                self.write_coordinate_fields(at);
                self.map.set_view(at, self.zoom);
                return None;
            }
            Ok(None) => policy::fallback(Transition::LocationCommit, Failure::NotFound),
            Err(ref err) => policy::fallback(Transition::LocationCommit, Failure::Api(err)),
        };

        match failure {
            Fallback::Notice(notice) => Some(notice),
            Fallback::Label { .. } | Fallback::Silent => None,
        }
    }

    /// Handles a location commit end to end.
    pub async fn commit_location(&mut self, text: impl Into<String>) -> Option<Notice> {
        let pending = match self.begin_location_commit(text) {
            Ok(pending) => pending,
            Err(notice) => return Some(notice),
        };
        let result = self.geocoder.search(&pending.query).await;
        self.finish_forward_lookup(pending, result)
    }

    // -------------------------------------------------------------------------
    // Coordinate field commit
    // -------------------------------------------------------------------------

    /// Moves the selection to the typed coordinates, if both fields parse.
    ///
    /// Returns `None` and leaves everything untouched when either field is
    /// not a valid number.
    pub fn begin_coordinate_commit(&mut self) -> Option<ReverseLookup> {
        let at = match parse_coordinate(&self.fields.latitude, &self.fields.longitude) {
            Ok(at) => at,
            Err(err) => {
                debug!(error = %err, "Ignoring coordinate commit");
                return None;
            }
        };

        self.coordinates_seq.invalidate();
        self.select(at);
        self.map.set_view(at, self.zoom);

        Some(ReverseLookup {
            ticket: self.location_seq.issue(),
            transition: Transition::CoordinateCommit,
            at,
        })
    }

    /// Commits new latitude text and refreshes the location name in the background.
    pub async fn commit_latitude(&mut self, text: impl Into<String>) -> Option<Notice> {
        self.set_latitude_text(text);
        self.refresh_from_coordinates().await
    }

    /// Commits new longitude text and refreshes the location name in the background.
    pub async fn commit_longitude(&mut self, text: impl Into<String>) -> Option<Notice> {
        self.set_longitude_text(text);
        self.refresh_from_coordinates().await
    }

    async fn refresh_from_coordinates(&mut self) -> Option<Notice> {
        let pending = self.begin_coordinate_commit()?;
        let result = self.geocoder.reverse(pending.at).await;
        self.finish_reverse_lookup(pending, result)
    }

    // -------------------------------------------------------------------------
    // Submit
    // -------------------------------------------------------------------------

    /// Validates the form and issues an irradiance request.
    ///
    /// Invalid input yields the alert to show; no request is issued.
    pub fn begin_submit(&mut self) -> Result<SizingRequest, Notice> {
        let (at, power) = self
            .validate_submission()
            .map_err(|detail| Notice::alert(format!("{INVALID_INPUT_ALERT}\n{detail}")))?;

        Ok(SizingRequest {
            ticket: self.report_seq.issue(),
            at,
            power,
        })
    }

    fn validate_submission(&self) -> solarsite_geo::Result<(Coordinate, PowerRequest)> {
        let at = parse_coordinate(&self.fields.latitude, &self.fields.longitude)?;
        let daily_energy_kwh = parse_number("power", &self.fields.power_kwh)?;
        Ok((at, PowerRequest::new(daily_energy_kwh)))
    }

    /// Turns irradiance data into a report, or the failure into an alert.
    pub fn finish_submit(&mut self, pending: SizingRequest, result: ApiResult<f64>) -> Option<Notice> {
        if !self.report_seq.is_current(pending.ticket) {
            debug!(at = %pending.at, "Discarding stale sizing result");
            return None;
        }

        match result {
            Ok(avg) => {
                let report = SizingReport::new(avg, pending.power);
                debug!(
                    avg_irradiance = avg,
                    area_m2 = report.result.area_m2,
                    "Sizing computed"
                );
                Some(Notice::Report(report))
            }
            Err(ref err) => match policy::fallback(Transition::Submit, Failure::Api(err)) {
                Fallback::Notice(notice) => Some(notice),
                _ => Some(Notice::alert(policy::IRRADIANCE_FAILED_ALERT)),
            },
        }
    }

    /// Handles a submit end to end.
    pub async fn submit(&mut self) -> Notice {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(notice) => return notice,
        };
        let result = self.irradiance.average_irradiance(pending.at).await;
        self.finish_submit(pending, result)
            .unwrap_or_else(|| Notice::alert(policy::IRRADIANCE_FAILED_ALERT))
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Sets the selected point and moves the marker to it.
    fn select(&mut self, at: Coordinate) {
        self.selected = Some(at);
        if let Some(old) = self.marker.take() {
            self.map.remove_marker(old);
        }
        self.marker = Some(self.map.add_marker(at));
    }

    fn write_coordinate_fields(&mut self, at: Coordinate) {
        self.fields.latitude = at.latitude.to_string();
        self.fields.longitude = at.longitude.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{
        IRRADIANCE_FAILED_ALERT, LOCATION_ERROR_LABEL, LOCATION_NOT_FOUND_ALERT,
        LOCATION_NOT_FOUND_LABEL, NO_PLACE_AT_POINT_ALERT,
    };
    use solarsite_api_client::endpoints::IrradianceSeries;
    use solarsite_api_client::ApiError;
    use solarsite_geo::{MarkerMap, DEFAULT_CENTER};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy)]
    enum Reply {
        Name(&'static str),
        Point(f64, f64),
        Value(f64),
        Nothing,
        Status(u16),
    }

    /// Scripted geocoder and irradiance source sharing one call counter.
    #[derive(Clone)]
    struct Scripted {
        reverse: Reply,
        search: Reply,
        average: Reply,
        calls: Rc<Cell<usize>>,
    }

    impl Scripted {
        fn new() -> Self {
            Self {
                reverse: Reply::Name("Jaipur, Rajasthan, India"),
                search: Reply::Point(48.8566, 2.3522),
                average: Reply::Value(5.0),
                calls: Rc::new(Cell::new(0)),
            }
        }

        fn record(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn failure<T>(status: u16) -> ApiResult<T> {
        Err(ApiError::api_response(status, "scripted failure"))
    }

    impl Geocoder for Scripted {
        async fn reverse(&self, _at: Coordinate) -> ApiResult<Option<String>> {
            self.record();
            match self.reverse {
                Reply::Name(name) => Ok(Some(name.to_string())),
                Reply::Nothing => Ok(None),
                Reply::Status(status) => failure(status),
                other => panic!("unexpected reverse reply {other:?}"),
            }
        }

        async fn search(&self, _query: &str) -> ApiResult<Option<Coordinate>> {
            self.record();
            match self.search {
                Reply::Point(lat, lng) => Ok(Some(Coordinate::new(lat, lng))),
                Reply::Nothing => Ok(None),
                Reply::Status(status) => failure(status),
                other => panic!("unexpected search reply {other:?}"),
            }
        }
    }

    impl IrradianceSource for Scripted {
        async fn average_irradiance(&self, _at: Coordinate) -> ApiResult<f64> {
            self.record();
            match self.average {
                Reply::Value(avg) => Ok(avg),
                Reply::Status(status) => failure(status),
                other => panic!("unexpected irradiance reply {other:?}"),
            }
        }
    }

    type Controller = FormController<MarkerMap, Scripted, Scripted>;

    fn controller(scripted: &Scripted) -> Controller {
        FormController::new(MarkerMap::default(), scripted.clone(), scripted.clone())
    }

    fn assert_consistent(form: &Controller, expected: Coordinate) {
        assert_eq!(form.selected_point(), Some(expected));
        assert_eq!(form.fields().latitude, expected.latitude.to_string());
        assert_eq!(form.fields().longitude, expected.longitude.to_string());
        assert_eq!(form.map().markers(), vec![expected]);
    }

    fn alert_text(notice: Option<Notice>) -> String {
        match notice {
            Some(Notice::Alert { message }) => message,
            other => panic!("expected an alert, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_map_click_updates_fields_marker_and_name() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);
        let point = Coordinate::new(26.95, 75.8);

        assert!(form.click_map(point).await.is_none());

        assert_consistent(&form, point);
        assert_eq!(form.fields().location, "Jaipur, Rajasthan, India");
        assert_eq!(form.map().center(), DEFAULT_CENTER);
    }

    #[tokio::test]
    async fn test_repeated_clicks_leave_exactly_one_marker() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);

        for i in 0..5 {
            let _ = form.click_map(Coordinate::new(10.0 + f64::from(i), 20.0)).await;
            assert_eq!(form.map().marker_count(), 1);
        }
        assert_consistent(&form, Coordinate::new(14.0, 20.0));
    }

    #[tokio::test]
    async fn test_map_click_labels_location_and_alerts_on_failure() {
        let mut scripted = Scripted::new();
        scripted.reverse = Reply::Nothing;
        let mut form = controller(&scripted);
        let notice = form.click_map(Coordinate::new(0.0, -30.0)).await;
        assert_eq!(alert_text(notice), NO_PLACE_AT_POINT_ALERT);
        assert_eq!(form.fields().location, LOCATION_NOT_FOUND_LABEL);

        scripted.reverse = Reply::Status(503);
        let mut form = controller(&scripted);
        let notice = form.click_map(Coordinate::new(0.0, -30.0)).await;
        assert!(alert_text(notice).contains("503"));
        assert_eq!(form.fields().location, LOCATION_ERROR_LABEL);
        assert_eq!(form.map().marker_count(), 1);
    }

    #[tokio::test]
    async fn test_map_click_wraps_longitude() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);

        let _ = form.click_map(Coordinate::new(10.0, 200.0)).await;
        assert_eq!(form.selected_point(), Some(Coordinate::new(10.0, -160.0)));
    }

    #[tokio::test]
    async fn test_map_click_clamps_latitude() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);

        let _ = form.click_map(Coordinate::new(100.0, 20.0)).await;
        assert_eq!(form.selected_point(), Some(Coordinate::new(90.0, 20.0)));
        assert_eq!(form.fields().latitude, "90");
    }

    #[tokio::test]
    async fn test_forward_geocode_success_is_consistent() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);
        let _ = form.click_map(Coordinate::new(26.95, 75.8)).await;

        assert!(form.commit_location("Paris").await.is_none());

        let paris = Coordinate::new(48.8566, 2.3522);
        assert_consistent(&form, paris);
        assert_eq!(form.map().center(), paris);
        assert_eq!(form.map().zoom(), DEFAULT_ZOOM);
        assert_eq!(form.fields().location, "Paris");
    }

    #[tokio::test]
    async fn test_forward_geocode_empty_result_alerts_without_mutation() {
        let mut scripted = Scripted::new();
        scripted.search = Reply::Nothing;
        let mut form = controller(&scripted);
        let start = Coordinate::new(26.95, 75.8);
        let _ = form.click_map(start).await;

        let message = alert_text(form.commit_location("Atlantis").await);

        assert_eq!(message, LOCATION_NOT_FOUND_ALERT);
        assert_consistent(&form, start);
        assert_eq!(form.map().center(), DEFAULT_CENTER);
    }

    #[tokio::test]
    async fn test_forward_geocode_failure_is_visible() {
        let mut scripted = Scripted::new();
        scripted.search = Reply::Status(500);
        let mut form = controller(&scripted);

        let message = alert_text(form.commit_location("Paris").await);

        assert!(message.contains("500"));
        assert_eq!(form.selected_point(), None);
        assert!(!form.has_marker());
    }

    #[tokio::test]
    async fn test_blank_location_alerts_without_request() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);

        let message = alert_text(form.commit_location("   ").await);

        assert_eq!(message, LOCATION_NOT_FOUND_ALERT);
        assert_eq!(scripted.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_invalid_latitude_changes_nothing() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);
        form.set_longitude_text("75.8");

        assert!(form.commit_latitude("abc").await.is_none());

        assert_eq!(scripted.calls.get(), 0);
        assert_eq!(form.map().center(), DEFAULT_CENTER);
        assert_eq!(form.map().marker_count(), 0);
        assert_eq!(form.selected_point(), None);
    }

    #[tokio::test]
    async fn test_coordinate_commit_recentres_and_refreshes_name() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);
        form.set_latitude_text("48.8566");

        assert!(form.commit_longitude(" 2.3522 ").await.is_none());

        let paris = Coordinate::new(48.8566, 2.3522);
        assert_eq!(form.selected_point(), Some(paris));
        assert_eq!(form.map().center(), paris);
        assert_eq!(form.map().markers(), vec![paris]);
        assert_eq!(form.fields().longitude, " 2.3522 ");
        assert_eq!(form.fields().location, "Jaipur, Rajasthan, India");
    }

    #[tokio::test]
    async fn test_coordinate_commit_failure_keeps_location() {
        let mut scripted = Scripted::new();
        scripted.reverse = Reply::Status(503);
        let mut form = controller(&scripted);
        form.set_latitude_text("1.0");
        let _ = form.begin_location_commit("Somewhere");
        assert!(form.commit_longitude("2.0").await.is_none());
        assert_eq!(form.fields().location, "Somewhere");

        scripted.reverse = Reply::Nothing;
        let mut form = controller(&scripted);
        form.set_latitude_text("1.0");
        let _ = form.begin_location_commit("Elsewhere");
        assert!(form.commit_longitude("2.0").await.is_none());
        assert_eq!(form.fields().location, "Elsewhere");
    }

    #[tokio::test]
    async fn test_submit_with_non_numeric_power_never_fetches() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);
        let _ = form.click_map(Coordinate::new(26.95, 75.8)).await;
        let calls_before = scripted.calls.get();
        form.set_power_text("two");

        let notice = form.submit().await;

        let message = alert_text(Some(notice));
        assert!(message.starts_with(INVALID_INPUT_ALERT));
        assert!(message.contains("power"));
        assert_eq!(scripted.calls.get(), calls_before);
    }

    #[tokio::test]
    async fn test_submit_reports_required_area() {
        let mut scripted = Scripted::new();
        let series = IrradianceSeries::from_values([
            ("202101".to_string(), 4.0),
            ("202102".to_string(), 5.0),
            ("202103".to_string(), 6.0),
        ]);
        scripted.average = Reply::Value(series.mean().unwrap());
        let mut form = controller(&scripted);
        let _ = form.click_map(Coordinate::new(26.95, 75.8)).await;
        form.set_power_text("2");

        match form.submit().await {
            Notice::Report(report) => {
                assert_eq!(report.result.avg_irradiance_kwh_m2_day, 5.0);
                assert_eq!(report.result.area_m2, 0.5);
                assert_eq!(report.daily_energy_kwh, 2.0);
            }
            other => panic!("expected a report, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_failure_alerts() {
        let mut scripted = Scripted::new();
        scripted.average = Reply::Status(500);
        let mut form = controller(&scripted);
        form.set_latitude_text("26.9");
        form.set_longitude_text("75.8");
        form.set_power_text("3");

        let message = alert_text(Some(form.submit().await));
        assert_eq!(message, IRRADIANCE_FAILED_ALERT);
    }

    #[test]
    fn test_stale_reverse_lookup_is_discarded() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);

        let first = form.begin_map_click(Coordinate::new(1.0, 1.0));
        let second = form.begin_map_click(Coordinate::new(2.0, 2.0));

        assert!(form.finish_reverse_lookup(second, Ok(Some("Second".to_string()))).is_none());
        assert!(form.finish_reverse_lookup(first, Ok(Some("First".to_string()))).is_none());

        assert_eq!(form.fields().location, "Second");
        assert_eq!(form.map().marker_count(), 1);
    }

    #[test]
    fn test_click_supersedes_pending_forward_lookup() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);

        let search = form.begin_location_commit("Paris").unwrap();
        let click = Coordinate::new(3.0, 4.0);
        let reverse = form.begin_map_click(click);

        let late = form.finish_forward_lookup(search, Ok(Some(Coordinate::new(48.8566, 2.3522))));
        assert!(late.is_none());
        assert_consistent(&form, click);

        let _ = form.finish_reverse_lookup(reverse, Ok(Some("Clicked".to_string())));
        assert_eq!(form.fields().location, "Clicked");
    }

    #[test]
    fn test_committed_location_beats_pending_reverse_lookup() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);

        let reverse = form.begin_map_click(Coordinate::new(1.0, 1.0));
        let _search = form.begin_location_commit("Typed by user").unwrap();

        let _ = form.finish_reverse_lookup(reverse, Ok(Some("Late name".to_string())));
        assert_eq!(form.fields().location, "Typed by user");
    }

    #[test]
    fn test_only_latest_submission_reports() {
        let scripted = Scripted::new();
        let mut form = controller(&scripted);
        form.set_latitude_text("26.9");
        form.set_longitude_text("75.8");
        form.set_power_text("2");

        let first = form.begin_submit().unwrap();
        let second = form.begin_submit().unwrap();

        assert!(form.finish_submit(first, Ok(4.0)).is_none());
        assert!(matches!(form.finish_submit(second, Ok(5.0)), Some(Notice::Report(_))));
    }
}
