// 筛选映射器的性质测试
//
// 验证：
// - 默认状态编码为空
// - encode(decode(p)) 幂等
// - 非默认字段可往返，多选成员顺序不变
// - 多选切换自反
// - 任意输入都不会 panic

use media_discovery_backend::models::catalog::ANIME_GENRES;
use media_discovery_backend::models::{
    AnimeFilter, AnimeFormat, AnimeSeason, AnimeStatus, Bounds, Choice, FilterSelection,
    MediaKind, MultiSelectField, QueryParams, SelectionSet, TmdbFilter, TvStatus,
};
use media_discovery_backend::services::filter_mapper::keys;
use media_discovery_backend::services::FilterStateMapper;
use proptest::prelude::*;
use std::fmt::Debug;

fn choice<T: Clone + Debug + 'static>(
    values: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = Choice<T>> {
    prop_oneof![Just(Choice::All), values.prop_map(Choice::Only)]
}

fn media_kind() -> impl Strategy<Value = MediaKind> {
    prop::sample::select(MediaKind::ALL.to_vec())
}

fn genre_ids() -> impl Strategy<Value = SelectionSet> {
    prop::collection::vec("[0-9]{1,5}", 0..5).prop_map(|ids| ids.into_iter().collect())
}

fn tmdb_filter(with_status: bool) -> impl Strategy<Value = TmdbFilter> {
    let status = if with_status {
        choice(prop::sample::select(TvStatus::ALL.to_vec())).boxed()
    } else {
        Just(Choice::All).boxed()
    };

    (
        genre_ids(),
        choice("[a-z]{2}"),
        status,
        0u32..=500,
        (0u32..=20, 0u32..=20),
        (0u32..=400, 0u32..=400),
    )
        .prop_map(|(genre_ids, original_language, status, votes, score, runtime)| TmdbFilter {
            genre_ids,
            original_language,
            status,
            minimum_vote_count: votes,
            user_score: Bounds::new(f64::from(score.0) * 0.5, f64::from(score.1) * 0.5),
            runtime: Bounds::new(runtime.0, runtime.1),
        })
}

fn anime_filter() -> impl Strategy<Value = AnimeFilter> {
    (
        prop::sample::subsequence(ANIME_GENRES.to_vec(), 0..=4).prop_shuffle(),
        choice(1940u16..=2026),
        choice(prop::sample::select(AnimeSeason::ALL.to_vec())),
        choice(prop::sample::select(AnimeFormat::ALL.to_vec())),
        choice(prop::sample::select(AnimeStatus::ALL.to_vec())),
        prop_oneof![Just(String::new()), "[a-z][a-z ]{0,10}"],
    )
        .prop_map(|(genres, year, season, format, airing_status, title_query)| AnimeFilter {
            genres: genres.into_iter().collect(),
            year,
            season,
            format,
            airing_status,
            title_query,
        })
}

fn selection() -> impl Strategy<Value = FilterSelection> {
    prop_oneof![
        tmdb_filter(false).prop_map(FilterSelection::Movie),
        tmdb_filter(true).prop_map(FilterSelection::Tv),
        anime_filter().prop_map(FilterSelection::Anime),
    ]
}

fn members(selection: &FilterSelection) -> Vec<String> {
    let set = match selection {
        FilterSelection::Movie(filter) | FilterSelection::Tv(filter) => &filter.genre_ids,
        FilterSelection::Anime(filter) => &filter.genres,
    };
    set.iter().map(str::to_string).collect()
}

/// 混合合法与非法值的查询参数
fn raw_params() -> impl Strategy<Value = QueryParams> {
    let key = prop::sample::select(vec![
        keys::WITH_GENRES,
        keys::WITH_ORIGINAL_LANGUAGE,
        keys::WITH_STATUS,
        keys::VOTE_COUNT_GTE,
        keys::VOTE_AVERAGE_GTE,
        keys::VOTE_AVERAGE_LTE,
        keys::WITH_RUNTIME_GTE,
        keys::WITH_RUNTIME_LTE,
        keys::GENRES,
        keys::YEAR,
        keys::SEASON,
        keys::FORMAT,
        keys::STATUS,
        keys::QUERY,
        "page",
    ]);
    let value = prop_oneof![
        Just("All".to_string()),
        Just(String::new()),
        Just("NaN".to_string()),
        Just("FALL".to_string()),
        Just("3".to_string()),
        "[0-9]{1,4}",
        "[0-9]{1,2}\\.[05]",
        "-?[0-9a-z,. ]{0,8}",
    ];

    prop::collection::vec((key, value), 0..10).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    })
}

proptest! {
    #[test]
    fn encode_of_decode_is_idempotent(params in raw_params(), kind in media_kind()) {
        let once = FilterStateMapper::encode(&FilterStateMapper::decode(&params, kind));
        let twice = FilterStateMapper::encode(&FilterStateMapper::decode(&once, kind));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn selection_round_trips(selection in selection()) {
        let encoded = FilterStateMapper::encode(&selection);
        let decoded = FilterStateMapper::decode(&encoded, selection.kind());
        prop_assert_eq!(decoded, selection);
    }

    #[test]
    fn round_trip_survives_url_serialization(selection in selection()) {
        let search = FilterStateMapper::encode(&selection).to_query_string();
        let decoded = FilterStateMapper::decode(&QueryParams::parse(&search), selection.kind());
        prop_assert_eq!(decoded, selection);
    }

    #[test]
    fn round_trip_keeps_emission_order(selection in selection()) {
        let search = FilterStateMapper::encode(&selection).to_query_string();
        let decoded = FilterStateMapper::decode(&QueryParams::parse(&search), selection.kind());

        prop_assert_eq!(members(&decoded), members(&selection));
        prop_assert_eq!(FilterStateMapper::encode(&decoded).to_query_string(), search);
    }

    #[test]
    fn toggle_is_self_inverse(selection in selection(), id in "[0-9A-Za-z ]{1,6}") {
        let field = match selection.kind() {
            MediaKind::Anime => MultiSelectField::Genres,
            _ => MultiSelectField::GenreIds,
        };
        let once = FilterStateMapper::toggle_member(&selection, field, &id);
        let twice = FilterStateMapper::toggle_member(&once, field, &id);
        prop_assert_eq!(twice, selection);
    }

    #[test]
    fn decode_never_panics(
        pairs in prop::collection::vec((any::<String>(), any::<String>()), 0..8),
        kind in media_kind(),
    ) {
        let params: QueryParams = pairs.into_iter().collect();
        let selection = FilterStateMapper::decode(&params, kind);
        prop_assert_eq!(selection.kind(), kind);
    }
}

#[test]
fn defaults_encode_to_empty_params() {
    for kind in MediaKind::ALL {
        assert!(FilterStateMapper::encode(&FilterStateMapper::reset(kind)).is_empty());
    }
}

#[test]
fn anime_decode_of_empty_params_is_reset() {
    assert_eq!(
        FilterStateMapper::decode(&QueryParams::new(), MediaKind::Anime),
        FilterStateMapper::reset(MediaKind::Anime)
    );
}
