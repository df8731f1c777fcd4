use serde;
use std::fmt;
use std::str::FromStr;
use thiserror;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value:?}")]
pub struct InvalidValue {
    pub kind: &'static str,
    pub value: String,
}

// Declares a closed set of wire literals. Decoding anything outside the set fails.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidValue;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(InvalidValue {
                        kind: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_enum! {
    /// Language of the returned texts. Also applied client wide, see `Client::with_locale`.
    Locale {
        Fr => "fr",
        En => "en",
        De => "de",
        Es => "es",
        It => "it",
        Nl => "nl",
        Pl => "pl",
        Pt => "pt",
    }
}

string_enum! {
    OrderType {
        Alphabetical => "alphabetical",
        Title => "title",
        Popularity => "popularity",
        Followers => "followers",
    }
}

string_enum! {
    OrderDateType {
        Ascending => "date",
        Descending => "-date",
    }
}

string_enum! {
    FormatType {
        Hd => "hd",
        All => "all",
    }
}

string_enum! {
    OrderFavoriteType {
        Alphabetical => "alphabetical",
        Progression => "progression",
        RemainingTime => "remaining_time",
        RemainingEpisodes => "remaining_episodes",
    }
}

string_enum! {
    StatusFavoriteType {
        Current => "current",
        Active => "active",
        Archived => "archived",
    }
}

string_enum! {
    OrderShowMemberType {
        Alphabetical => "alphabetical",
        Progression => "progression",
        RemainingTime => "remaining_time",
        RemainingEpisodes => "remaining_episodes",
        LastSeen => "last_seen",
        LastAdded => "last_added",
        Rating => "rating",
        AvgRating => "avg_rating",
        Custom => "custom",
        NextDate => "next_date",
    }
}

string_enum! {
    StatusShowMemberType {
        Current => "current",
        Active => "active",
        Archived => "archived",
        ArchivedAndCompleted => "archived_and_completed",
        ArchivedAndNotCompleted => "archived_and_not_completed",
        Completed => "completed",
        ActiveAndCompleted => "active_and_completed",
        NotStarted => "not_started",
        Stopped => "stopped",
    }
}

string_enum! {
    RecommendationStatus {
        Wait => "wait",
        Accept => "accept",
        Decline => "decline",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_literal_round_trips() {
        for status in RecommendationStatus::ALL {
            assert_eq!(status.as_str().parse::<RecommendationStatus>().unwrap(), *status);
        }
        for order in OrderShowMemberType::ALL {
            assert_eq!(order.as_str().parse::<OrderShowMemberType>().unwrap(), *order);
        }
        for status in StatusShowMemberType::ALL {
            assert_eq!(status.as_str().parse::<StatusShowMemberType>().unwrap(), *status);
        }
        for order in OrderFavoriteType::ALL {
            assert_eq!(order.as_str().parse::<OrderFavoriteType>().unwrap(), *order);
        }
        for status in StatusFavoriteType::ALL {
            assert_eq!(status.as_str().parse::<StatusFavoriteType>().unwrap(), *status);
        }
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>().unwrap(), *locale);
        }
        for order in OrderType::ALL {
            assert_eq!(order.as_str().parse::<OrderType>().unwrap(), *order);
        }
        for order in OrderDateType::ALL {
            assert_eq!(order.as_str().parse::<OrderDateType>().unwrap(), *order);
        }
        for format in FormatType::ALL {
            assert_eq!(format.as_str().parse::<FormatType>().unwrap(), *format);
        }
        assert_eq!(Locale::ALL.len(), 8);
    }

    #[test]
    fn unknown_literal_is_rejected() {
        let err = "test".parse::<RecommendationStatus>().unwrap_err();
        assert_eq!(err.kind, "RecommendationStatus");
        assert_eq!(err.value, "test");
        assert_eq!(err.to_string(), "invalid RecommendationStatus: \"test\"");
    }

    #[test]
    fn literals_are_case_sensitive() {
        assert!("Accept".parse::<RecommendationStatus>().is_err());
        assert!("EN".parse::<Locale>().is_err());
    }

    #[test]
    fn deserialize_reports_field_and_value() {
        #[derive(serde::Deserialize, Debug)]
        struct Wrapper {
            #[allow(dead_code)]
            status: StatusShowMemberType,
        }

        let json = r#"{"status":"paused"}"#;
        let mut de = serde_json::Deserializer::from_str(json);
        let err = serde_path_to_error::deserialize::<_, Wrapper>(&mut de).unwrap_err();
        assert_eq!(err.path().to_string(), "status");
        assert!(err.to_string().contains("invalid StatusShowMemberType: \"paused\""));
    }

    #[test]
    fn deserialize_rejects_non_string() {
        assert!(serde_json::from_str::<Locale>("1").is_err());
        assert_eq!(serde_json::from_str::<Locale>("\"de\"").unwrap(), Locale::De);
    }

    #[test]
    fn serializes_to_wire_literal() {
        assert_eq!(serde_json::to_string(&OrderDateType::Descending).unwrap(), "\"-date\"");
        assert_eq!(Locale::En.to_string(), "en");
    }
}
