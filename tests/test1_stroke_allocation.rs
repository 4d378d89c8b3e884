use fairway_league::engine::allocation::{
    StrokePolicy, net_score, net_score_with_strokes, strokes_given, strokes_received,
};

#[test]
fn zero_handicap_never_receives_strokes() {
    for rank in 1..=18u8 {
        assert_eq!(net_score(5, 0, rank), 5);
        assert_eq!(strokes_given(0, rank), 0);
    }
}

#[test]
fn course_policy_allocates_exactly_handicap_strokes() {
    for handicap in 1..=18i32 {
        let holes_with_stroke = (1..=18u8)
            .filter(|&rank| strokes_given(handicap, rank) > 0)
            .count();
        assert_eq!(
            holes_with_stroke, handicap as usize,
            "handicap {handicap} should stroke on exactly that many holes"
        );
        // the stroked holes are the hardest ones
        for rank in 1..=handicap as u8 {
            assert_eq!(strokes_given(handicap, rank), 1);
        }
    }
}

#[test]
fn course_policy_base_strokes_above_eighteen() {
    // handicap 20: a stroke everywhere, two on the two hardest holes
    for rank in 1..=18u8 {
        let expected = if rank <= 2 { 2 } else { 1 };
        assert_eq!(strokes_given(20, rank), expected);
    }
    assert_eq!(net_score(6, 20, 1), 4);
    assert_eq!(net_score(6, 20, 18), 5);

    // every hole receives at least floor(h / 18)
    for handicap in [19, 36, 40] {
        for rank in 1..=18u8 {
            assert!(strokes_given(handicap, rank) >= handicap / 18);
        }
    }
}

#[test]
fn differential_policy_strokes_only_for_higher_handicap() {
    // handicaps 10 vs 4: diff 6, strokes on ranks 1..=6 only
    assert_eq!(strokes_received(10, 4, 3), 1);
    assert_eq!(strokes_received(10, 4, 6), 1);
    assert_eq!(strokes_received(10, 4, 9), 0);

    // the lower-handicap side never receives
    for rank in 1..=18u8 {
        assert_eq!(strokes_received(4, 10, rank), 0);
    }
}

#[test]
fn differential_policy_is_one_sided_per_rank() {
    for h1 in 0..=24i32 {
        for h2 in 0..=24i32 {
            for rank in 1..=18u8 {
                let a = strokes_received(h1, h2, rank);
                let b = strokes_received(h2, h1, rank);
                assert!(
                    a == 0 || b == 0,
                    "both sides stroked at h1={h1} h2={h2} rank={rank}"
                );
            }
        }
    }
}

#[test]
fn net_from_strokes_received() {
    assert_eq!(net_score_with_strokes(5, 1), 4);
    assert_eq!(net_score_with_strokes(5, 0), 5);
}

#[test]
fn policies_stay_distinct() {
    // handicap 10 vs 4: the course policy strokes every hole ranked
    // 1..=10, the match policy only the 6-shot difference. Same inputs
    // can produce different nets; nothing merges the two.
    let gross = 6;
    assert_eq!(StrokePolicy::CourseHandicap.net(gross, 10, 4, 5), 5);
    assert_eq!(StrokePolicy::HeadToHead.net(gross, 10, 4, 5), 5);
    // rank 8: inside the course handicap, outside the difference
    assert_eq!(StrokePolicy::CourseHandicap.net(gross, 10, 4, 8), 5);
    assert_eq!(StrokePolicy::HeadToHead.net(gross, 10, 4, 8), 6);
}

#[test]
fn equal_handicaps_play_straight_up() {
    for rank in 1..=18u8 {
        assert_eq!(strokes_received(12, 12, rank), 0);
    }
}
