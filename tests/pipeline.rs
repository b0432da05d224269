// tests/pipeline.rs
//
// Filter → search → sort pipeline and the cascading option lists, on a
// small in-memory sheet.
//
use lit_sheet::config::sheet::{CascadePolicy, SelectSpec, SheetSpec, SHEET};
use lit_sheet::config::state::{SortMode, ViewState};
use lit_sheet::core::collate;
use lit_sheet::dataset::Dataset;
use lit_sheet::view::{filter_options, ResultView};

const SHEET_TEXT: &str = "\
작품명,작가,갈래,교과서,대단원,소단원
청산별곡,미상,고전시가,천재(김),1.문학의 본질,(1) 아름다운 언어
진달래꽃,김소월,현대시,천재(김),1.문학의 본질,(2) 문학의 갈래
님의 침묵,한용운,현대시,천재(김),2.문학의 수용,(1) 감상의 즐거움
\"고향, 그 쓸쓸함\",백석,현대시,비상(한),1.서정과 서사,(1) 서정 갈래
Romeo와 Juliet,셰익스피어,희곡,비상(한),2.세계 문학,(1) 외국 고전
진달래꽃,김억,현대시,비상(한),2.세계 문학,(2) 번역과 창작
";

fn sample() -> Dataset {
    Dataset::from_csv_text(SHEET_TEXT).unwrap()
}

#[test]
fn unfiltered_view_keeps_every_row() {
    let ds = sample();
    let state = ViewState::new(&SHEET);
    let rv = ResultView::build(&ds, &SHEET, &state);
    assert_eq!(rv.len(), ds.row_count());
}

#[test]
fn filters_are_exact_whole_value_matches() {
    let ds = sample();
    let mut state = ViewState::new(&SHEET);
    state.set_filter(&SHEET, 0, Some("천재(김)".into()));

    let rv = ResultView::build(&ds, &SHEET, &state);
    assert_eq!(rv.len(), 3);
    let col = ds.col_index("교과서").unwrap();
    for i in 0..rv.len() {
        assert_eq!(rv.row(i).unwrap()[col], "천재(김)");
    }

    // Substring of a real value matches nothing: exact equality only.
    state.set_filter(&SHEET, 0, Some("천재".into()));
    let rv = ResultView::build(&ds, &SHEET, &state);
    assert!(rv.is_empty());
}

#[test]
fn chained_filters_intersect() {
    let ds = sample();
    let mut state = ViewState::new(&SHEET);
    state.set_filter(&SHEET, 0, Some("비상(한)".into()));
    state.set_filter(&SHEET, 1, Some("2.세계 문학".into()));

    let rv = ResultView::build(&ds, &SHEET, &state);
    assert_eq!(rv.len(), 2);
}

#[test]
fn search_is_case_insensitive_substring() {
    let ds = sample();
    let mut state = ViewState::new(&SHEET);

    state.set_search("romeo");
    let rv = ResultView::build(&ds, &SHEET, &state);
    assert_eq!(rv.len(), 1);
    assert_eq!(rv.row(0).unwrap()[0], "Romeo와 Juliet");

    state.set_search("진달래");
    let rv = ResultView::build(&ds, &SHEET, &state);
    assert_eq!(rv.len(), 2);

    // Search matches only the searchable column, not e.g. the author.
    state.set_search("김소월");
    let rv = ResultView::build(&ds, &SHEET, &state);
    assert!(rv.is_empty());

    state.set_search("");
    let rv = ResultView::build(&ds, &SHEET, &state);
    assert_eq!(rv.len(), ds.row_count());
}

#[test]
fn search_composes_with_filters() {
    let ds = sample();
    let mut state = ViewState::new(&SHEET);
    state.set_filter(&SHEET, 0, Some("비상(한)".into()));
    state.set_search("진달래");

    let rv = ResultView::build(&ds, &SHEET, &state);
    assert_eq!(rv.len(), 1);
    let author = ds.col_index("작가").unwrap();
    assert_eq!(rv.row(0).unwrap()[author], "김억");
}

#[test]
fn title_sort_orders_adjacent_pairs() {
    let ds = sample();
    let state = ViewState::new(&SHEET);
    let rv = ResultView::build(&ds, &SHEET, &state);

    let col = ds.col_index("작품명").unwrap();
    for i in 1..rv.len() {
        let prev = &rv.row(i - 1).unwrap()[col];
        let cur = &rv.row(i).unwrap()[col];
        assert_ne!(collate::compare(prev, cur), std::cmp::Ordering::Greater);
    }
}

#[test]
fn title_sort_is_stable_for_equal_keys() {
    let ds = sample();
    let state = ViewState::new(&SHEET);
    let rv = ResultView::build(&ds, &SHEET, &state);

    // Two 진달래꽃 rows: sheet order is 김소월 before 김억, and equal
    // titles must keep it.
    let author = ds.col_index("작가").unwrap();
    let authors: Vec<&str> = (0..rv.len())
        .filter(|&i| rv.row(i).unwrap()[0] == "진달래꽃")
        .map(|i| rv.row(i).unwrap()[author].as_str())
        .collect();
    assert_eq!(authors, vec!["김소월", "김억"]);
}

#[test]
fn source_sort_uses_tie_break_chain() {
    let ds = sample();
    let mut state = ViewState::new(&SHEET);
    state.set_sort(SortMode::Source);
    let rv = ResultView::build(&ds, &SHEET, &state);

    let chain: Vec<usize> = ["교과서", "대단원", "소단원"]
        .iter()
        .map(|n| ds.col_index(n).unwrap())
        .collect();
    for i in 1..rv.len() {
        let prev = rv.row(i - 1).unwrap();
        let cur = rv.row(i).unwrap();
        let ord = collate::compare_chain(
            chain.iter().map(|&c| prev[c].as_str()),
            chain.iter().map(|&c| cur[c].as_str()),
        );
        assert_ne!(ord, std::cmp::Ordering::Greater);
    }
}

#[test]
fn options_cascade_from_upstream_filters() {
    let ds = sample();
    let mut state = ViewState::new(&SHEET);

    // No filters: every textbook, collation-sorted, distinct.
    let books = filter_options(&ds, &SHEET, &state, 0);
    assert_eq!(books, vec!["비상(한)".to_string(), "천재(김)".to_string()]);

    // Textbook picked: level-1 options shrink to that book's units.
    state.set_filter(&SHEET, 0, Some("천재(김)".into()));
    let units = filter_options(&ds, &SHEET, &state, 1);
    assert_eq!(
        units,
        vec!["1.문학의 본질".to_string(), "2.문학의 수용".to_string()]
    );

    // Options at a level ignore that level's own selection.
    state.set_filter(&SHEET, 1, Some("2.문학의 수용".into()));
    assert_eq!(filter_options(&ds, &SHEET, &state, 1).len(), 2);
}

#[test]
fn cascade_policy_clears_downstream_selections() {
    let mut state = ViewState::new(&SHEET);
    state.set_filter(&SHEET, 1, Some("1.문학의 본질".into()));
    state.set_filter(&SHEET, 2, Some("(2) 문학의 갈래".into()));

    // SHEET ships ClearDownstream: re-picking level 0 wipes 1 and 2.
    state.set_filter(&SHEET, 0, Some("천재(김)".into()));
    assert_eq!(state.filters[1], None);
    assert_eq!(state.filters[2], None);
}

static INDEPENDENT: SheetSpec = SheetSpec {
    searchable: &["작품명"],
    filterable: &[
        SelectSpec { column: "교과서", placeholder: "교과서 선택", all_label: "전체" },
        SelectSpec { column: "대단원", placeholder: "대단원 선택", all_label: "전체" },
        SelectSpec { column: "소단원", placeholder: "소단원 선택", all_label: "전체" },
    ],
    display: &["작품명", "작가", "갈래", "교과서", "대단원", "소단원"],
    title_column: "작품명",
    source_chain: &["교과서", "대단원", "소단원"],
    cascade: CascadePolicy::Independent,
};

#[test]
fn independent_policy_keeps_downstream_selections() {
    let mut state = ViewState::new(&INDEPENDENT);
    state.set_filter(&INDEPENDENT, 1, Some("1.문학의 본질".into()));
    state.set_filter(&INDEPENDENT, 0, Some("천재(김)".into()));
    assert_eq!(state.filters[1].as_deref(), Some("1.문학의 본질"));
}

#[test]
fn missing_configured_column_matches_nothing() {
    // Sheet without the 소단원 column.
    let ds = Dataset::from_csv_text(
        "작품명,작가,갈래,교과서,대단원\n유리창,정지용,현대시,천재(김),1.문학의 본질\n",
    )
    .unwrap();

    let mut state = ViewState::new(&SHEET);
    state.set_filter(&SHEET, 2, Some("(1) 아무거나".into()));
    let rv = ResultView::build(&ds, &SHEET, &state);
    assert!(rv.is_empty());

    // And the option list for it is empty rather than a panic.
    assert!(filter_options(&ds, &SHEET, &state, 2).is_empty());
}
