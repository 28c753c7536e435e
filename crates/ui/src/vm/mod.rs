mod markdown_vm;
mod quiz_vm;
mod topic_vm;

pub use markdown_vm::{MarkdownMode, markdown_to_html, sanitize_html};
pub use quiz_vm::{
    ButtonTone, OptionMark, OptionVm, QuestionVm, QuizIntent, QuizPanelVm, map_quiz_panel,
};
pub use topic_vm::{TopicListItemVm, map_topic_list};
