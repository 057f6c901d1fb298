//! Static equivalence tables.
//!
//! Alias groups are configuration data, not matching logic: each group maps
//! one canonical identity to the raw variants declared to denote it. Groups
//! are applied by canonical form, so cosmetic variants of any listed
//! spelling (punctuation, spacing, the 祢/你/袮 class) join the group
//! automatically. Keeping the tables here lets them be audited and extended
//! without touching the resolution code.

/// Characters folded into a single equivalence class before any comparison.
pub const CHAR_EQUIVALENCES: &[(char, char)] = &[('祢', '你'), ('袮', '你')];

/// Full-width punctuation folded to its half-width counterpart.
pub const PUNCTUATION_FOLDS: &[(char, char)] = &[
    ('（', '('),
    ('）', ')'),
    ('，', ','),
    ('。', '.'),
    ('：', ':'),
    ('！', '!'),
    ('？', '?'),
];

/// One alias group: a declared display name plus its raw variants.
#[derive(Debug, Clone, Copy)]
pub struct AliasGroup {
    pub display: &'static str,
    pub variants: &'static [&'static str],
}

/// Song alias groups collected from four years of praise-history data.
pub const SONG_ALIASES: &[AliasGroup] = &[
    AliasGroup {
        display: "至愛的回嚮",
        variants: &["至愛的回嚮", "至愛的迴響"],
    },
    AliasGroup {
        display: "新的異象 新的方向",
        variants: &["新的異象 新的方向", "新的異象，新的方向"],
    },
    AliasGroup {
        display: "坐在寶坐上聖潔羔羊",
        variants: &["坐在寶坐上聖潔羔羊", "坐在寶座上聖潔羔羊"],
    },
    AliasGroup {
        display: "神真正心意 (The heart of worship)",
        variants: &[
            "神真正心意 (The heart of worship)",
            "神真正心意 (The Heart of Worship)",
        ],
    },
    AliasGroup {
        display: "每一天 (Day By Day)",
        variants: &["每一天 (Day By Day)", "每一天"],
    },
    AliasGroup {
        display: "Amazing Grace (My Chains Are Gone) 奇異恩典",
        variants: &[
            "Amazing Grace (My Chains Are Gone) 奇異恩典",
            "奇異恩典 Amazing Grace (My Chains are Gone)",
            "奇異恩典（除掉困鎖）",
            "奇異恩典(除掉困鎖)",
        ],
    },
    AliasGroup {
        display: "房角石頭（Cornerstone）",
        variants: &[
            "房角石頭（Cornerstone）",
            "Cornerstone",
            "房角基石",
            "Cornerstone 房角基石",
        ],
    },
    AliasGroup {
        display: "唯獨在基督裡 (In Christ Alone)",
        variants: &["唯獨在基督裡 (In Christ Alone)", "唯獨在基督裡"],
    },
    AliasGroup {
        display: "獻上頌讚",
        variants: &[
            "獻上頌讚",
            "獻上頌讚 (Shout To The Lord)",
            "獻上頌讚 Shout to The Lord",
            "Shout to The Lord 獻上頌讚",
        ],
    },
    AliasGroup {
        display: "King of Kings 萬代君主",
        variants: &["King of Kings 萬代君主", "萬代君主"],
    },
    AliasGroup {
        display: "憂愁痛悔的靈",
        variants: &["憂愁痛悔的靈", "憂傷痛悔的靈"],
    },
    AliasGroup {
        display: "願你平安",
        variants: &["願你平安", "願您平安"],
    },
    AliasGroup {
        display: "Ocean Will Part",
        variants: &["Ocean Will Part", "海會分開（Ocean Will Part）", "海會分開"],
    },
    AliasGroup {
        display: "世界最美的聲音",
        variants: &["世界最美的聲音", "世界最美的聲音 (奇異恩典)"],
    },
    AliasGroup {
        display: "讓生命寬宏",
        variants: &["讓生命寬宏", "讓生命寛宏"],
    },
    AliasGroup {
        display: "安靜 Still",
        variants: &["安靜 Still", "安靜 (Still)"],
    },
    AliasGroup {
        display: "再次將我更新",
        variants: &["再次將我更新", "再次讓我更新"],
    },
    AliasGroup {
        display: "耶和華以勒",
        variants: &["耶和華以勒", "耶和華以勒 (同心圓)"],
    },
    AliasGroup {
        display: "主禱文（請教導我們禱告）",
        variants: &["主禱文（請教導我們禱告）", "主禱文 (請教導我們禱告)"],
    },
];

/// Non-song annotations stripped from song cells. Matched case-insensitively
/// at non-alphanumeric boundaries; an immediately enclosing bracket pair is
/// swallowed with the annotation.
pub const STRIP_ANNOTATIONS: &[&str] = &[
    "Chorus Only",
    "skip verse",
    "by Esther Chow",
    "C1 C2",
    "Medley",
    "Medly",
    "Canto",
    "Mando",
];

/// Whole-cell values that mark a liturgical element, not a song.
pub const NON_SONG_MARKERS: &[&str] = &["Communion", "Holy Communion", "Baptism"];

/// Publisher alias groups for the copyright column of the song index.
pub const PUBLISHER_ALIASES: &[AliasGroup] = &[
    AliasGroup {
        display: "Stream Of Praise Music",
        variants: &[
            "Stream Of Praise Music",
            "Stream of Praise",
            "Steam of Praise",
            "Stream of Praise Musice",
        ],
    },
    AliasGroup {
        display: "Hillsong Music Publishing",
        variants: &["Hillsong Music Publishing", "Hillsong Worship", "Hillsong"],
    },
    AliasGroup {
        display: "Integrity Music",
        variants: &["Integrity Music", "Integrity's Hosanna! Music"],
    },
    AliasGroup {
        display: "小羊詩歌",
        variants: &["小羊詩歌", "Lamb Music 小羊詩歌"],
    },
];

/// Songs whose copyright metadata is missing or misattributed in the song
/// index; the override wins over whatever the metadata reports.
pub const PUBLISHER_OVERRIDES: &[(&str, &str)] = &[
    ("房角石頭（Cornerstone）", "Hillsong Music Publishing"),
    ("King of Kings 萬代君主", "Hillsong Music Publishing"),
    ("唯獨在基督裡 (In Christ Alone)", "Thankyou Music"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use std::collections::BTreeMap;

    #[test]
    fn song_groups_do_not_overlap() {
        let mut owner: BTreeMap<String, &str> = BTreeMap::new();
        for group in SONG_ALIASES {
            for variant in group.variants {
                let form = normalize(variant).as_str().to_string();
                if let Some(previous) = owner.insert(form, group.display) {
                    assert_eq!(
                        previous, group.display,
                        "variant '{variant}' is claimed by two groups"
                    );
                }
            }
        }
    }

    #[test]
    fn overrides_reference_listed_publishers() {
        for (_, publisher) in PUBLISHER_OVERRIDES {
            // Overrides may name publishers outside the alias table; they
            // intern like any other first-seen spelling. Just make sure the
            // table entries are non-empty.
            assert!(!publisher.trim().is_empty());
        }
    }
}
