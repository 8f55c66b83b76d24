use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::domain::CoordinateDomain;
use crate::core::types::{DataPoint, ScreenPoint};
use crate::error::SticksResult;

/// Semantic pointer event carrying the data-space position it maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesEvent {
    Pressed(DataPoint),
    Released(DataPoint),
    Clicked(DataPoint),
    HoverEntered(DataPoint),
    HoverLeft(DataPoint),
    DoubleClicked(DataPoint),
}

/// Events emitted for one raw pointer notification.
pub type EmittedEvents = SmallVec<[SeriesEvent; 2]>;

/// Converts raw screen-space pointer input into semantic series events.
///
/// Click pairing follows a two-state machine: a release emits a click only
/// when a press was registered and not yet consumed. Release and
/// double-click report the last recorded press position, so a drag that
/// ends elsewhere still resolves against where it started.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEventMapper {
    last_press: Option<ScreenPoint>,
    pressed: bool,
}

impl PointerEventMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn on_press<D>(&mut self, domain: &D, position: ScreenPoint) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        self.last_press = Some(position);
        self.pressed = true;

        let mut events = EmittedEvents::new();
        events.push(SeriesEvent::Pressed(domain.screen_to_data(position)?));
        Ok(events)
    }

    pub fn on_release<D>(
        &mut self,
        domain: &D,
        position: ScreenPoint,
    ) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        let anchor = self.last_press.unwrap_or(position);
        let data_point = domain.screen_to_data(anchor)?;

        let mut events = EmittedEvents::new();
        events.push(SeriesEvent::Released(data_point));
        if self.pressed {
            events.push(SeriesEvent::Clicked(data_point));
        }
        self.pressed = false;
        Ok(events)
    }

    pub fn on_hover_enter<D>(
        &mut self,
        domain: &D,
        position: ScreenPoint,
    ) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        let mut events = EmittedEvents::new();
        events.push(SeriesEvent::HoverEntered(domain.screen_to_data(position)?));
        Ok(events)
    }

    pub fn on_hover_leave<D>(
        &mut self,
        domain: &D,
        position: ScreenPoint,
    ) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        let mut events = EmittedEvents::new();
        events.push(SeriesEvent::HoverLeft(domain.screen_to_data(position)?));
        Ok(events)
    }

    /// Double-click bypasses the press/release pairing and always resolves
    /// against the last recorded press position.
    pub fn on_double_click<D>(
        &mut self,
        domain: &D,
        position: ScreenPoint,
    ) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        let anchor = self.last_press.unwrap_or(position);

        let mut events = EmittedEvents::new();
        events.push(SeriesEvent::DoubleClicked(domain.screen_to_data(anchor)?));
        Ok(events)
    }
}

/// Nearest series sample to a data-space position, by euclidean distance.
///
/// Hosts use this to snap hover feedback onto the closest stick.
#[must_use]
pub fn snap_to_nearest(points: &[DataPoint], target: DataPoint) -> Option<DataPoint> {
    points.iter().copied().min_by_key(|point| {
        let dx = point.x - target.x;
        let dy = point.y - target.y;
        OrderedFloat(dx * dx + dy * dy)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_picks_the_closest_sample() {
        let points = vec![
            DataPoint::new(0.0, 0.0),
            DataPoint::new(5.0, 5.0),
            DataPoint::new(10.0, 0.0),
        ];
        let snapped = snap_to_nearest(&points, DataPoint::new(4.0, 4.5)).expect("non-empty");
        assert_eq!(snapped, DataPoint::new(5.0, 5.0));
    }

    #[test]
    fn snap_returns_none_for_empty_series() {
        assert!(snap_to_nearest(&[], DataPoint::new(0.0, 0.0)).is_none());
    }
}
