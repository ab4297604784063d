use nr_core::SentimentLabel;

pub fn weight(label: &SentimentLabel) -> f64 {
    match label {
        SentimentLabel::Positive => 10.0,
        SentimentLabel::Negative => 1.0,
        SentimentLabel::Neutral | SentimentLabel::Other(_) => 5.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_weights() {
        assert_eq!(weight(&SentimentLabel::from("POSITIVE")), 10.0);
        assert_eq!(weight(&SentimentLabel::from("NEGATIVE")), 1.0);
        assert_eq!(weight(&SentimentLabel::from("NEUTRAL")), 5.0);
        assert_eq!(weight(&SentimentLabel::from("anything-else")), 5.0);
    }
}
