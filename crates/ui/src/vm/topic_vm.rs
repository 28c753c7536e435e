use services::TopicSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicListItemVm {
    pub name: String,
    pub count_label: String,
}

#[must_use]
pub fn map_topic_list(topics: &[TopicSummary]) -> Vec<TopicListItemVm> {
    topics
        .iter()
        .filter(|summary| !summary.topic.is_empty())
        .map(|summary| {
            let count_label = match summary.total {
                1 => "1 question".to_string(),
                n => format!("{n} questions"),
            };
            TopicListItemVm {
                name: summary.topic.as_str().to_string(),
                count_label,
            }
        })
        .collect()
}
