use crate::app::detail::DetailRequest;
use crate::app::search::SearchRequest;
use crate::github::models::{SearchResultSet, UserDetail};

#[derive(Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    Back,
    SwitchPane,
    SwitchPaneBack,
    FocusInput,
    NextPage,
    PrevPage,
    OpenInBrowser,
    InputChar(char),
    InputBackspace,
    SubmitSearch,
    ClearSearch,
    DataLoaded(DataPayload),
    LoadError(FailedFetch),
    HistoryUpdated(Vec<String>),
    Quit,
}

#[derive(Debug)]
pub enum DataPayload {
    SearchResults {
        token: u64,
        results: SearchResultSet,
    },
    UserDetail {
        token: u64,
        login: String,
        detail: UserDetail,
    },
}

#[derive(Debug)]
pub enum FailedFetch {
    Search { token: u64, message: String },
    UserDetail {
        token: u64,
        login: String,
        message: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum SideEffect {
    FetchSearch(SearchRequest),
    FetchUserDetails(DetailRequest),
    RecordHistory(String),
    OpenUrl(String),
}
