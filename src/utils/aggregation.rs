use crate::types::CommitActivityPoint;

/// Aggregate activity points to reduce visual noise and improve performance
pub fn aggregate_series(points: &[CommitActivityPoint], target_points: usize) -> Vec<CommitActivityPoint> {
    if points.len() <= target_points {
        return points.to_vec();
    }

    let window_size = (points.len() as f64 / target_points as f64).ceil() as usize;
    let mut aggregated = Vec::new();

    for chunk in points.chunks(window_size) {
        let date = chunk[0].date.clone(); // Use first date in chunk
        let commits: usize = chunk.iter().map(|p| p.commits).sum();
        aggregated.push(CommitActivityPoint { date, commits });
    }

    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point(date: &str, commits: usize) -> CommitActivityPoint {
        CommitActivityPoint {
            date: date.to_string(),
            commits,
        }
    }

    #[test]
    fn test_no_aggregation_needed() {
        let points = vec![point("2023-01-01", 10), point("2023-01-02", 20)];
        let target_points = 5;

        let result = aggregate_series(&points, target_points);
        assert_eq!(result, points);
    }

    #[test]
    fn test_basic_aggregation() {
        let points = vec![
            point("2023-01-01", 10),
            point("2023-01-02", 20),
            point("2023-01-03", 30),
            point("2023-01-04", 40),
        ];
        let target_points = 2;

        let result = aggregate_series(&points, target_points);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], point("2023-01-01", 30));
        assert_eq!(result[1], point("2023-01-03", 70));
    }

    #[test]
    fn test_empty_series() {
        let points: Vec<CommitActivityPoint> = vec![];
        let target_points = 5;

        let result = aggregate_series(&points, target_points);
        assert!(result.is_empty());
    }

    #[test]
    fn test_uneven_chunks() {
        let points = vec![
            point("2023-01-01", 10),
            point("2023-01-02", 20),
            point("2023-01-03", 30),
            point("2023-01-04", 40),
            point("2023-01-05", 50),
        ];
        let target_points = 2;

        let result = aggregate_series(&points, target_points);
        // With 5 points and target of 2, we get a window size of 3 (ceil(5/2)),
        // resulting in two chunks: [0,1,2] and [3,4]
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], point("2023-01-01", 60));
        assert_eq!(result[1], point("2023-01-04", 90));
    }
}
