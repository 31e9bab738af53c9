use chrono::{DateTime, Datelike, Utc, Weekday};

use crate::types::Planet;

/// Chaldean descending order, the sequence planetary hours cycle through.
pub const CHALDEAN_ORDER: [Planet; 7] = [
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
];

/// Sunrise/sunset frame for one local day, supplied by the caller. The
/// adjacent events are needed to place night hours that fall before
/// sunrise or after sunset.
#[derive(Debug, Clone, Copy)]
pub struct SolarDay {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub previous_sunset: DateTime<Utc>,
    pub next_sunrise: DateTime<Utc>,
}

/// Traditional ruler of each weekday, the planet governing its first
/// daytime hour.
pub fn day_ruler(weekday: Weekday) -> Planet {
    match weekday {
        Weekday::Sun => Planet::Sun,
        Weekday::Mon => Planet::Moon,
        Weekday::Tue => Planet::Mars,
        Weekday::Wed => Planet::Mercury,
        Weekday::Thu => Planet::Jupiter,
        Weekday::Fri => Planet::Venus,
        Weekday::Sat => Planet::Saturn,
    }
}

/// Planet ruling the planetary hour containing `now`.
///
/// Daylight is split into 12 equal hours starting at sunrise, night into
/// 12 starting at sunset; rulers step through the Chaldean order from the
/// day ruler. Returns `None` when `now` falls outside the supplied frame.
pub fn hour_ruler(now: DateTime<Utc>, day: &SolarDay) -> Option<Planet> {
    let (hour_index, ruled_date) = if now >= day.sunrise && now < day.sunset {
        let length = (day.sunset - day.sunrise) / 12;
        if length.num_seconds() == 0 {
            return None;
        }
        let index = ((now - day.sunrise).num_seconds() / length.num_seconds()) as usize;
        (index.min(11), now.date_naive())
    } else if now < day.sunrise && now >= day.previous_sunset {
        // Night hours before sunrise belong to the previous day's cycle.
        let length = (day.sunrise - day.previous_sunset) / 12;
        if length.num_seconds() == 0 {
            return None;
        }
        let index = ((now - day.previous_sunset).num_seconds() / length.num_seconds()) as usize;
        (12 + index.min(11), (now - chrono::Duration::days(1)).date_naive())
    } else if now >= day.sunset && now < day.next_sunrise {
        let length = (day.next_sunrise - day.sunset) / 12;
        if length.num_seconds() == 0 {
            return None;
        }
        let index = ((now - day.sunset).num_seconds() / length.num_seconds()) as usize;
        (12 + index.min(11), now.date_naive())
    } else {
        return None;
    };

    let ruler = day_ruler(ruled_date.weekday());
    let start = CHALDEAN_ORDER.iter().position(|p| *p == ruler)?;
    Some(CHALDEAN_ORDER[(start + hour_index) % 7])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn frame(date: (i32, u32, u32)) -> SolarDay {
        let (y, m, d) = date;
        SolarDay {
            sunrise: Utc.with_ymd_and_hms(y, m, d, 6, 0, 0).unwrap(),
            sunset: Utc.with_ymd_and_hms(y, m, d, 18, 0, 0).unwrap(),
            previous_sunset: Utc.with_ymd_and_hms(y, m, d - 1, 18, 0, 0).unwrap(),
            next_sunrise: Utc.with_ymd_and_hms(y, m, d + 1, 6, 0, 0).unwrap(),
        }
    }

    #[test]
    fn first_hour_of_day_belongs_to_day_ruler() {
        // 2025-06-22 is a Sunday.
        let day = frame((2025, 6, 22));
        let ruler = hour_ruler(Utc.with_ymd_and_hms(2025, 6, 22, 6, 30, 0).unwrap(), &day);
        assert_eq!(ruler, Some(Planet::Sun));
    }

    #[test]
    fn hours_step_through_chaldean_order() {
        let day = frame((2025, 6, 22));
        // Second daytime hour on a Sunday: Sun -> Venus.
        let ruler = hour_ruler(Utc.with_ymd_and_hms(2025, 6, 22, 7, 30, 0).unwrap(), &day);
        assert_eq!(ruler, Some(Planet::Venus));
    }

    #[test]
    fn night_hours_continue_the_cycle() {
        let day = frame((2025, 6, 22));
        // First night hour is the 13th of the cycle: Sun + 12 steps = Jupiter.
        let ruler = hour_ruler(Utc.with_ymd_and_hms(2025, 6, 22, 18, 10, 0).unwrap(), &day);
        assert_eq!(ruler, Some(Planet::Jupiter));
    }

    #[test]
    fn pre_dawn_hours_use_previous_day_ruler() {
        // 04:00 on Monday the 23rd still runs on Sunday's cycle.
        let day = frame((2025, 6, 23));
        let ruler = hour_ruler(Utc.with_ymd_and_hms(2025, 6, 23, 4, 0, 0).unwrap(), &day);
        // Sunday night, 23rd hour of the cycle (hour index 22): Sun + 22 = Venus.
        assert_eq!(ruler, Some(Planet::Venus));
    }

    #[test]
    fn sub_second_hour_length_yields_none() {
        // A daylight span under 12 seconds makes each hour shorter than
        // one second; the frame is unusable rather than a divide-by-zero.
        let sunrise = Utc.with_ymd_and_hms(2025, 6, 22, 6, 0, 0).unwrap();
        let day = SolarDay {
            sunrise,
            sunset: sunrise + chrono::Duration::seconds(5),
            previous_sunset: Utc.with_ymd_and_hms(2025, 6, 21, 18, 0, 0).unwrap(),
            next_sunrise: Utc.with_ymd_and_hms(2025, 6, 23, 6, 0, 0).unwrap(),
        };
        let ruler = hour_ruler(sunrise + chrono::Duration::seconds(2), &day);
        assert_eq!(ruler, None);
    }

    #[test]
    fn out_of_frame_yields_none() {
        let day = frame((2025, 6, 22));
        let ruler = hour_ruler(Utc.with_ymd_and_hms(2025, 6, 25, 12, 0, 0).unwrap(), &day);
        assert_eq!(ruler, None);
    }
}
