#[cfg(test)]
mod tests {
    use crate::models::catalog::ParseMode;
    use crate::transformations::shaping::{apply_factor, apply_mode};
    use polars::prelude::*;
    use proptest::prelude::*;

    #[test]
    fn test_series_mode_casts_index_and_value() {
        let df = df!(
            "region" => ["cluster_0", "cluster_1"],
            "capacity" => [12i64, 3i64],
        )
        .unwrap();

        let shaped = apply_mode(df, ParseMode::Series).unwrap();

        assert_eq!(shaped.width(), 2);
        assert_eq!(
            shaped.column("region").unwrap().dtype(),
            &DataType::String
        );
        let values = shaped.column("capacity").unwrap().f64().unwrap();
        assert_eq!(values.get(0), Some(12.0));
    }

    #[test]
    fn test_series_mode_rejects_extra_columns() {
        let df = df!(
            "region" => ["cluster_0"],
            "a" => [1.0],
            "b" => [2.0],
        )
        .unwrap();

        let result = apply_mode(df, ParseMode::Series);
        assert!(result.is_err());

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("exactly one value column"), "{message}");
    }

    #[test]
    fn test_table_mode_casts_every_value_column() {
        let df = df!(
            "region" => ["cluster_0", "cluster_1"],
            "cluster_0" => [0i64, 1i64],
            "cluster_1" => [1i64, 0i64],
        )
        .unwrap();

        let shaped = apply_mode(df, ParseMode::Table).unwrap();

        assert_eq!(shaped.width(), 3);
        for name in ["cluster_0", "cluster_1"] {
            assert_eq!(
                shaped.column(name).unwrap().dtype(),
                &DataType::Float64,
                "column {name}"
            );
        }
    }

    #[test]
    fn test_table_mode_rejects_single_column() {
        let df = df!("region" => ["cluster_0"]).unwrap();
        assert!(apply_mode(df, ParseMode::Table).is_err());
    }

    #[test]
    fn test_raw_mode_passes_through_untouched() {
        let df = df!(
            "cluster_0" => [0.1, 0.4],
            "cluster_1" => [0.2, 0.5],
        )
        .unwrap();

        let shaped = apply_mode(df.clone(), ParseMode::Raw).unwrap();
        assert!(shaped.equals(&df));
    }

    #[test]
    fn test_factor_one_is_identity() {
        let df = df!(
            "region" => ["cluster_0"],
            "capacity" => [10.0],
        )
        .unwrap();

        let scaled = apply_factor(df.clone(), ParseMode::Series, 1.0).unwrap();
        assert!(scaled.equals(&df));
    }

    #[test]
    fn test_factor_skips_the_index_column() {
        let df = df!(
            "region" => ["cluster_0", "cluster_1"],
            "capacity" => [10.0, 20.0],
        )
        .unwrap();

        let scaled = apply_factor(df, ParseMode::Series, 0.3).unwrap();

        let index = scaled.column("region").unwrap().str().unwrap();
        assert_eq!(index.get(0), Some("cluster_0"));

        let values = scaled.column("capacity").unwrap().f64().unwrap();
        assert_eq!(values.get(0), Some(10.0 * 0.3));
        assert_eq!(values.get(1), Some(20.0 * 0.3));
    }

    #[test]
    fn test_factor_preserves_nulls() {
        let df = df!(
            "region" => ["cluster_0", "cluster_1"],
            "capacity" => [Some(10.0), None],
        )
        .unwrap();

        let scaled = apply_factor(df, ParseMode::Series, 0.3).unwrap();
        let values = scaled.column("capacity").unwrap().f64().unwrap();

        assert_eq!(values.get(0), Some(3.0));
        assert_eq!(values.get(1), None);
    }

    proptest! {
        /// Scaling multiplies every value element-wise and keeps the shape.
        #[test]
        fn prop_factor_scales_elementwise(
            values in proptest::collection::vec(-1.0e6f64..1.0e6, 1..50),
            factor in 0.01f64..10.0,
        ) {
            let labels: Vec<String> = (0..values.len()).map(|i| format!("cluster_{i}")).collect();
            let df = df!(
                "region" => &labels,
                "capacity" => &values,
            )
            .unwrap();

            let scaled = apply_factor(df, ParseMode::Series, factor).unwrap();
            prop_assert_eq!(scaled.height(), values.len());

            let scaled_values = scaled.column("capacity").unwrap().f64().unwrap();
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(scaled_values.get(i), Some(value * factor));
            }
        }
    }
}
