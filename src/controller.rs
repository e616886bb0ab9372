//! Request flow shared by every screen: bind the channel, post, route failures.

use crate::channel::ChannelHandle;
use crate::dom;
use crate::error::ChannelError;
use crate::model::{Request, ServerResponse};
use yew::Callback;

#[derive(Clone, PartialEq)]
pub struct Controller {
    channel: ChannelHandle,
    report: Callback<ChannelError>,
}

impl Controller {
    pub fn new(channel: ChannelHandle, report: Callback<ChannelError>) -> Self {
        Self { channel, report }
    }

    /// Controller whose failures end up in a blocking alert.
    pub fn with_alerts(channel: ChannelHandle) -> Self {
        Self::new(channel, Callback::from(report_failure))
    }

    /// Retargets to `name`, then posts `initial` (if any) once the channel is ready.
    pub fn start(
        &self,
        name: &str,
        initial: Option<Request>,
        on_response: Callback<ServerResponse>,
    ) {
        let on_ready = {
            let this = self.clone();
            let name = name.to_string();
            Callback::from(move |()| {
                log::info!("channel `{name}` ready");
                if let Some(request) = &initial {
                    this.send(request, ChannelError::Init, on_response.clone());
                }
            })
        };
        let on_error = {
            let report = self.report.clone();
            Callback::from(move |msg: String| report.emit(ChannelError::Retarget(msg)))
        };
        self.channel.retarget(name, on_ready, on_error);
    }

    /// Posts `request`. Transport failures are reported through `failure`.
    pub fn send(
        &self,
        request: &Request,
        failure: fn(String) -> ChannelError,
        on_response: Callback<ServerResponse>,
    ) {
        let action = request.action();
        log::debug!("posting `{action}`");
        let on_success = Callback::from(move |resp: ServerResponse| {
            if let Some(code) = resp.error.as_deref() {
                log::warn!("server answered `{action}` with {code}");
            }
            on_response.emit(resp);
        });
        let on_error = {
            let report = self.report.clone();
            Callback::from(move |msg: String| report.emit(failure(msg)))
        };
        self.channel.post(request, on_success, on_error);
    }
}

pub fn report_failure(err: ChannelError) {
    log::error!("request channel failed: {}", err.message());
    dom::alert(&err.to_string());
}
