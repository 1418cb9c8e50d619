//! JavaScript surface of the cdylib.
//!
//! The host page creates a `Session` through `new Session(configJson)`, calls
//! one method per UI event and re-renders from `snapshot()`. Successful calls
//! return the applied effect as JSON; a rejection is thrown as its kebab-case
//! code (`"insufficient-funds"`, ...).

use crate::economy::Effect;
use crate::error::{Outcome, Rejection};

/// JSON for an accepted call, or the code a host should show for a refused one.
pub fn reply(outcome: Outcome) -> Result<String, String> {
    match outcome {
        Ok(effect) => effect_json(&effect),
        Err(reason) => Err(reason.code().to_string()),
    }
}

/// Same as [`reply`] for calls that only succeed or refuse.
pub fn reply_unit(result: Result<(), Rejection>) -> Result<String, String> {
    reply(result.map(|()| Effect::none()))
}

fn effect_json(effect: &Effect) -> Result<String, String> {
    serde_json::to_string(effect).map_err(|e| e.to_string())
}

/// Browser timestamps arrive as `f64`; negative or NaN readings clamp to 0.
pub fn js_millis(ms: f64) -> u64 {
    ms as u64
}

#[cfg(target_arch = "wasm32")]
mod exports {
    use wasm_bindgen::prelude::*;

    use super::{effect_json, js_millis, reply, reply_unit};
    use crate::config::SessionConfig;
    use crate::platform;
    use crate::session::Session;

    fn js(result: Result<String, String>) -> Result<String, JsValue> {
        result.map_err(|code| JsValue::from_str(&code))
    }

    /// Install the console logger and panic hook. Safe to call more than once.
    #[wasm_bindgen(js_name = initEngine)]
    pub fn init() {
        if platform::init().is_err() {
            log::debug!("logger already installed");
        }
    }

    #[wasm_bindgen(js_name = Session)]
    pub struct WasmSession {
        inner: Session,
    }

    #[wasm_bindgen(js_class = Session)]
    impl WasmSession {
        /// `config_json` is optional; `{}` and `undefined` both mean defaults.
        #[wasm_bindgen(constructor)]
        pub fn new(config_json: Option<String>) -> Result<WasmSession, JsValue> {
            let config = match config_json {
                Some(json) => SessionConfig::from_json(&json)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?,
                None => SessionConfig::default(),
            };
            Ok(WasmSession {
                inner: Session::new(config),
            })
        }

        pub fn snapshot(&self) -> Result<String, JsValue> {
            self.inner
                .snapshot_json(platform::now_ms())
                .map_err(|e| JsValue::from_str(&e.to_string()))
        }

        pub fn advance(&mut self, now_ms: f64) -> Result<String, JsValue> {
            js(effect_json(&self.inner.advance(js_millis(now_ms))))
        }

        pub fn tick(&mut self, ticks: u32) -> Result<String, JsValue> {
            js(effect_json(&self.inner.tick(ticks)))
        }

        #[wasm_bindgen(js_name = setName)]
        pub fn set_name(&mut self, name: &str) -> Result<String, JsValue> {
            js(reply_unit(self.inner.set_name(name)))
        }

        #[wasm_bindgen(js_name = setTheme)]
        pub fn set_theme(&mut self, id: &str) -> Result<String, JsValue> {
            js(reply_unit(self.inner.set_theme(id)))
        }

        #[wasm_bindgen(js_name = claimLadderReward)]
        pub fn claim_ladder_reward(&mut self, level: u32) -> Result<String, JsValue> {
            js(reply(self.inner.claim_ladder_reward(level)))
        }

        #[wasm_bindgen(js_name = claimDailyBonus)]
        pub fn claim_daily_bonus(&mut self) -> Result<String, JsValue> {
            js(reply(self.inner.claim_daily_bonus(platform::now_ms())))
        }

        #[wasm_bindgen(js_name = purchaseUpgrade)]
        pub fn purchase_upgrade(&mut self, id: &str) -> Result<String, JsValue> {
            js(reply(self.inner.purchase_upgrade(id)))
        }

        #[wasm_bindgen(js_name = mineClick)]
        pub fn mine_click(&mut self) -> Result<String, JsValue> {
            js(effect_json(&self.inner.mine_click()))
        }

        #[wasm_bindgen(js_name = startMining)]
        pub fn start_mining(&mut self) {
            self.inner.start_mining();
        }

        #[wasm_bindgen(js_name = stopMining)]
        pub fn stop_mining(&mut self) {
            self.inner.stop_mining();
        }

        #[wasm_bindgen(js_name = startJob)]
        pub fn start_job(&mut self, id: &str) -> Result<String, JsValue> {
            js(reply(self.inner.start_job(id)))
        }

        #[wasm_bindgen(js_name = purchaseFurniture)]
        pub fn purchase_furniture(&mut self, id: &str) -> Result<String, JsValue> {
            js(reply(self.inner.purchase_furniture(id)))
        }

        #[wasm_bindgen(js_name = placeFurniture)]
        pub fn place_furniture(&mut self, id: &str, x: usize, y: usize) -> Result<String, JsValue> {
            js(reply(self.inner.place_furniture(id, x, y)))
        }

        #[wasm_bindgen(js_name = replaceFurniture)]
        pub fn replace_furniture(&mut self, id: &str, x: usize, y: usize) -> Result<String, JsValue> {
            js(reply(self.inner.replace_furniture(id, x, y)))
        }

        #[wasm_bindgen(js_name = removeFurniture)]
        pub fn remove_furniture(&mut self, x: usize, y: usize) -> Result<String, JsValue> {
            js(reply(self.inner.remove_furniture(x, y)))
        }

        #[wasm_bindgen(js_name = clickCell)]
        pub fn click_cell(
            &mut self,
            selected: Option<String>,
            x: usize,
            y: usize,
        ) -> Result<String, JsValue> {
            js(reply(self.inner.click_cell(selected.as_deref(), x, y)))
        }

        #[wasm_bindgen(js_name = startLotteryRound)]
        pub fn start_lottery_round(&mut self) -> Result<String, JsValue> {
            js(reply(self.inner.start_lottery_round()))
        }

        #[wasm_bindgen(js_name = revealCell)]
        pub fn reveal_cell(&mut self, index: usize) -> Result<String, JsValue> {
            js(reply(self.inner.reveal_cell(index)))
        }

        #[wasm_bindgen(js_name = setQuote)]
        pub fn set_quote(&mut self, price: u32) -> Result<String, JsValue> {
            js(reply_unit(self.inner.set_quote(u64::from(price))))
        }

        #[wasm_bindgen(js_name = buyShares)]
        pub fn buy_shares(&mut self, amount: u32) -> Result<String, JsValue> {
            js(reply(self.inner.buy_shares(u64::from(amount))))
        }

        #[wasm_bindgen(js_name = sellShares)]
        pub fn sell_shares(&mut self, amount: u32) -> Result<String, JsValue> {
            js(reply(self.inner.sell_shares(u64::from(amount))))
        }

        #[wasm_bindgen(js_name = buyMaxShares)]
        pub fn buy_max_shares(&mut self) -> Result<String, JsValue> {
            js(reply(self.inner.buy_max_shares()))
        }

        #[wasm_bindgen(js_name = sellAllShares)]
        pub fn sell_all_shares(&mut self) -> Result<String, JsValue> {
            js(reply(self.inner.sell_all_shares()))
        }
    }
}
