//! Grammar of the human-readable time strings.
//!
//! The bucketing code only asks a [`Locale`] for words; pluralization, joiner
//! words and calendar labels live here. [`French`] is the only locale shipped.

/// Wording used by the relative-time and duration formatters.
pub trait Locale {
    /// Phrase for a difference of less than two minutes, given the absolute
    /// difference in whole seconds.
    fn seconds(&self, seconds: i64) -> String;
    fn hours(&self, hours: i64) -> String;
    fn minutes(&self, minutes: i64) -> String;
    /// Word placed between the hours and the minutes.
    fn joiner(&self) -> &'static str;
    fn past(&self, phrase: &str) -> String;
    fn future(&self, phrase: &str) -> String;
    fn today(&self) -> &'static str;
    fn yesterday(&self) -> &'static str;
    fn tomorrow(&self) -> &'static str;
    /// `strftime` pattern for dates that get no relative label.
    fn date_format(&self) -> &'static str;
    /// Label for a duration shorter than one minute.
    fn under_a_minute(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct French;

impl Locale for French {
    fn seconds(&self, seconds: i64) -> String {
        let seconds = seconds.abs();
        let minutes = (seconds as f64 / 60.0).round() as i64;

        if minutes >= 2 {
            return self.minutes(minutes);
        }

        match seconds {
            0..=4 => "moins de 5 secondes".to_string(),
            5..=9 => "moins de 10 secondes".to_string(),
            10..=19 => "moins de 20 secondes".to_string(),
            20..=39 => "30 secondes".to_string(),
            40..=59 => "moins d’une minute".to_string(),
            _ => "1 minute".to_string(),
        }
    }

    fn hours(&self, hours: i64) -> String {
        if hours == 1 {
            "1 heure".to_string()
        } else {
            format!("{} heures", hours)
        }
    }

    fn minutes(&self, minutes: i64) -> String {
        if minutes == 1 {
            "1 minute".to_string()
        } else {
            format!("{} minutes", minutes)
        }
    }

    fn joiner(&self) -> &'static str {
        " et "
    }

    fn past(&self, phrase: &str) -> String {
        format!("il y a {}", phrase)
    }

    fn future(&self, phrase: &str) -> String {
        format!("dans {}", phrase)
    }

    fn today(&self) -> &'static str {
        "Aujourd’hui"
    }

    fn yesterday(&self) -> &'static str {
        "Hier"
    }

    fn tomorrow(&self) -> &'static str {
        "Demain"
    }

    fn date_format(&self) -> &'static str {
        "%d/%m/%Y"
    }

    fn under_a_minute(&self) -> &'static str {
        "Moins d’une minute"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_ladder() {
        let fr = French;
        assert_eq!(fr.seconds(0), "moins de 5 secondes");
        assert_eq!(fr.seconds(7), "moins de 10 secondes");
        assert_eq!(fr.seconds(15), "moins de 20 secondes");
        assert_eq!(fr.seconds(32), "30 secondes");
        assert_eq!(fr.seconds(-32), "30 secondes");
        assert_eq!(fr.seconds(45), "moins d’une minute");
        assert_eq!(fr.seconds(75), "1 minute");
        assert_eq!(fr.seconds(100), "2 minutes");
    }

    #[test]
    fn plurals() {
        let fr = French;
        assert_eq!(fr.hours(1), "1 heure");
        assert_eq!(fr.hours(3), "3 heures");
        assert_eq!(fr.minutes(1), "1 minute");
        assert_eq!(fr.minutes(23), "23 minutes");
    }
}
