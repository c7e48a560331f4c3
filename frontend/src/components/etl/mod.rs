//! ETL panel: source selection, file picking and the Run button.
//!
//! The panel state (mode, chosen file, in-flight flag, last summary) lives in the
//! store. This component only owns the hidden file input and the async read of a
//! picked file, which it hands to the store as `Action::FileSelected`.

use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::upload::{CsvFile, UploadMode};
use common::state::{Action, JobPanel};

mod stats;

#[derive(Properties, PartialEq)]
pub struct JobPanelProps {
    pub panel: JobPanel,
    pub on_action: Callback<Action>,
}

pub enum Msg {
    Browse,
    FilePicked(web_sys::File),
    RemoveFile,
}

pub struct JobPanelComponent {
    file_input_ref: NodeRef,
}

impl Component for JobPanelComponent {
    type Message = Msg;
    type Properties = JobPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Browse => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::FilePicked(file) => {
                let on_action = ctx.props().on_action.clone();
                let name = file.name();
                spawn_local(async move {
                    match read_as_bytes(&Blob::from(file)).await {
                        Ok(bytes) => on_action.emit(Action::FileSelected(CsvFile::new(name, bytes))),
                        Err(err) => {
                            gloo_console::error!(format!("Could not read {}: {}", name, err))
                        }
                    }
                });
                self.reset_input();
                false
            }
            Msg::RemoveFile => {
                self.reset_input();
                ctx.props().on_action.emit(Action::RemoveFile);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let JobPanelProps { panel, on_action } = ctx.props();
        let link = ctx.link();
        let mode = panel.selection.mode;

        let mode_class = |m: UploadMode| {
            if mode == m {
                "btn-mode-active"
            } else {
                "btn-mode-inactive"
            }
        };

        let on_change = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input
                .files()
                .and_then(|files| files.get(0))
                .map(Msg::FilePicked)
        });

        html! {
            <div class="etl-section">
                <p class="etl-intro">
                    {"Execute the ETL process to import data from CSV files. "}
                    {"You can use the default sample data or upload your own CSV file."}
                </p>
                if let Some(info) = &panel.info {
                    <p class="etl-info">
                        { format!(
                            "{}: {} (chunk size {}{})",
                            info.job_name,
                            info.architecture,
                            info.chunk_size,
                            if info.restartable { ", restartable" } else { "" }
                        ) }
                    </p>
                }

                <div class="etl-modes">
                    <button class={mode_class(UploadMode::Sample)}
                        onclick={on_action.reform(|_| Action::SelectMode(UploadMode::Sample))}>
                        {"Use Sample Data"}
                    </button>
                    <button class={mode_class(UploadMode::Upload)}
                        onclick={on_action.reform(|_| Action::SelectMode(UploadMode::Upload))}>
                        {"Upload CSV File"}
                    </button>
                </div>

                if mode == UploadMode::Upload {
                    <div class="upload-area" onclick={link.callback(|_| Msg::Browse)}>
                        <input
                            type="file"
                            accept=".csv"
                            style="display: none"
                            ref={self.file_input_ref.clone()}
                            onchange={on_change}
                        />
                        {
                            match &panel.selection.file {
                                Some(file) => html! {
                                    <div class="upload-file">
                                        <div class="upload-file-name">{ file.name.clone() }</div>
                                        <div class="upload-file-size">{ file.size_label() }</div>
                                        <button class="btn-remove-file" onclick={link.callback(|e: MouseEvent| {
                                            e.stop_propagation();
                                            Msg::RemoveFile
                                        })}>
                                            {"Remove File"}
                                        </button>
                                    </div>
                                },
                                None => html! {
                                    <div class="upload-placeholder">
                                        <div>{"Click to browse"}</div>
                                        <div class="upload-hint">{"CSV files only"}</div>
                                    </div>
                                },
                            }
                        }
                    </div>
                }

                <button
                    class="btn-success etl-button"
                    disabled={!panel.can_run()}
                    onclick={on_action.reform(|_| Action::RunJob)}
                >
                    if panel.in_flight {
                        <>
                            <div class="spinner"></div>
                            <span>{"Running ETL..."}</span>
                        </>
                    } else {
                        <span>{"Run ETL Job"}</span>
                    }
                </button>

                if let Some(result) = &panel.last_result {
                    { stats::view(result) }
                }
            </div>
        }
    }
}

impl JobPanelComponent {
    /// Clears the native picker so choosing the same file again fires `change`.
    fn reset_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
