use achiever::{
    Achieve, IntervalAchiever, RadiusAchiever, FETCH_PICK_AND_PLACE_N_OBS,
    FETCH_PICK_AND_PLACE_RANGE,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_pick_and_place(c: &mut Criterion) {
    let interval =
        IntervalAchiever::pick_and_place(FETCH_PICK_AND_PLACE_RANGE, FETCH_PICK_AND_PLACE_N_OBS)
            .unwrap();
    let radius =
        RadiusAchiever::pick_and_place(FETCH_PICK_AND_PLACE_RANGE, FETCH_PICK_AND_PLACE_N_OBS)
            .unwrap();
    let obs = vec![0.5_f32; FETCH_PICK_AND_PLACE_N_OBS];

    c.bench_function("interval_achieved", |b| {
        b.iter(|| interval.achieved(black_box(&obs), black_box(1)).unwrap())
    });
    c.bench_function("radius_achieved", |b| {
        b.iter(|| radius.achieved(black_box(&obs), black_box(1)).unwrap())
    });
}

criterion_group!(benches, bench_pick_and_place);
criterion_main!(benches);
