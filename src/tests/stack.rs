use crate::core::{CreationError, ScalableHistogram, ScalerSettings};
use crate::scaling::{WeightedEnsembleScaler, WeightedHistogram};
use crate::stack::*;
use crate::st::BinnedHistogram;
use crate::tests::util::*;

#[derive(Default)]
struct NameSink {
    layers: Vec<(&'static str, ColourId)>,
}

impl StackSink<&'static str> for NameSink {
    fn append(&mut self, histogram: &'static str, colour: ColourId) {
        self.layers.push((histogram, colour));
    }
}

#[test]
fn stack_keeps_insertion_order_and_distinct_colours() {
    let h1 = histo(&[1.0]);
    let h2 = histo(&[2.0]);
    let h3 = histo(&[3.0]);

    let mut builder = StackBuilder::new(Palette::default());
    builder.add(h1.clone());
    builder.add(h2.clone());
    builder.add(h3.clone());
    assert_eq!(3, builder.len());
    let stack = builder.build();

    assert_eq!(3, stack.len());
    let histograms: Vec<_> = stack.histograms().cloned().collect();
    assert_eq!(vec![h1, h2, h3], histograms);

    let colours: Vec<ColourId> = stack.colours().collect();
    assert_eq!(vec![ColourId(600), ColourId(632), ColourId(416)], colours);
}

#[test]
fn colours_are_drawn_once_per_add() {
    let mut palette = Palette::new(vec![ColourId(1), ColourId(2), ColourId(3)]).unwrap();
    {
        let mut builder = StackBuilder::new(&mut palette);
        builder.add(histo(&[1.0]));
        builder.add(histo(&[1.0]));
        assert_eq!(Some(ColourId(1)), builder.colour_of(0));
        assert_eq!(Some(ColourId(2)), builder.colour_of(1));
        assert_eq!(None, builder.colour_of(2));
    }
    assert_eq!(ColourId(3), palette.next_colour());
    assert_eq!(ColourId(1), palette.next_colour());
}

#[test]
fn palette_cycles_and_resets() {
    let mut palette = Palette::new(vec![ColourId(7), ColourId(8)]).unwrap();
    assert_eq!(2, palette.len());
    assert_eq!(ColourId(7), palette.next_colour());
    assert_eq!(ColourId(8), palette.next_colour());
    assert_eq!(ColourId(7), palette.next_colour());
    palette.reset();
    assert_eq!(ColourId(7), palette.next_colour());

    assert_eq!(Err(CreationError::EmptyPalette), Palette::new(Vec::new()));
}

#[test]
fn default_palette_is_distinct() {
    let palette = Palette::default();
    let colours = palette.colours();
    for (i, a) in colours.iter().enumerate() {
        for b in &colours[i + 1..] {
            assert!(a != b);
        }
    }
}

#[test]
fn added_histogram_can_be_decorated() {
    let mut builder = StackBuilder::new(Palette::default());
    builder.add(histo(&[1.0, 1.0])).fill(0.5);
    let stack = builder.build();
    assert_eq!(Some(2.0), stack.entries()[0].histogram.bin_content(1));
    assert_eq!(3.0, stack.total_area());
}

#[test]
fn empty_builder_yields_empty_stack() {
    let builder: StackBuilder<BinnedHistogram<f64>, Palette> = StackBuilder::new(Palette::default());
    assert!(builder.is_empty());
    let stack = builder.build();
    assert!(stack.is_empty());
    assert_eq!(0.0, stack.total_area());
    assert!(stack.cumulative_areas().is_empty());
}

#[test]
fn custom_sink_receives_layers_in_order() {
    let mut builder: StackBuilder<&'static str, Palette, NameSink> = StackBuilder::with_sink(Palette::default());
    builder.add_all(vec!["reference", "live"]);
    let sink = builder.build();
    assert_eq!(vec![("reference", ColourId(600)), ("live", ColourId(632))], sink.layers);
}

#[test]
fn stack_of_borrowed_histograms() {
    let base = histo(&[1.0, 1.0]);
    let top = histo(&[3.0]);
    let mut builder = StackBuilder::new(Palette::default());
    builder.add(&base);
    builder.add(&top);
    let stack = builder.build();
    assert!(std::ptr::eq(&base, stack.entries()[0].histogram));
    assert!(std::ptr::eq(&top, stack.entries()[1].histogram));
}

#[test]
fn normalized_stack_has_fixed_total_area() {
    let mut signal = histo(&[1.0, 5.0, 1.0]);
    let mut background = histo(&[30.0, 30.0, 40.0]);
    {
        let mut members = vec![
            WeightedHistogram::new(&mut background, 0.8),
            WeightedHistogram::new(&mut signal, 0.2),
        ];
        succ!(WeightedEnsembleScaler::new(ScalerSettings::diagnostic()).scale_ensemble(&mut members, 1000.0));
    }

    let mut builder = StackBuilder::new(Palette::default());
    builder.add(background);
    builder.add(signal);
    let stack = builder.build();

    let cumulative = stack.cumulative_areas();
    assert_eq!(2, cumulative.len());
    assert_approx_eq!(cumulative[0], 800.0, 0.08);
    assert_approx_eq!(cumulative[1], 1000.0, 0.1);
    assert_approx_eq!(stack.total_area(), 1000.0, 0.1);
    assert_eq!(stack.get(1).map(|e| e.histogram.integral() > 0.0), Some(true));
}

#[test]
fn stack_iterates_entries() {
    let mut builder = StackBuilder::new(Palette::default());
    builder.add_all((1..4).map(|i| histo(&[i as f64])));
    let stack = builder.build();

    let areas: Vec<f64> = (&stack).into_iter().map(|e| e.histogram.integral()).collect();
    assert_eq!(vec![1.0, 2.0, 3.0], areas);

    let entries = stack.into_entries();
    assert_eq!(ColourId(416), entries[2].colour);
}
