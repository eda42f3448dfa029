use anyhow::Result;
use rand::Rng;
use serde_json::json;

struct Simulator {
    client: reqwest::Client,
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::var("BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080/api/v1".to_string());
    let sim = Simulator {
        client: reqwest::Client::new(),
        base_url,
    };

    println!("generating demo traffic against {}", sim.base_url);

    let mut total = 0;

    println!("\nphase 1: normal operation (all healthy)");
    total += sim.normal_traffic(400).await;
    sim.print_health().await?;

    println!("\nphase 2: outage on processor_a (GlobalPay_BR)");
    total += sim.outage_traffic(300).await;
    sim.print_health().await?;
    sim.print_routing("PIX", "BR").await?;

    println!("\nphase 3: processor_a recovering");
    total += sim.recovery_traffic(200).await;
    sim.print_health().await?;

    println!("\nphase 4: all processors recovered");
    total += sim.normal_traffic(200).await;
    sim.print_health().await?;
    sim.print_routing("PIX", "BR").await?;

    println!("\nhealth transitions (alerts):");
    sim.print_alerts().await?;

    println!("\ngenerated {} transactions total", total);
    Ok(())
}

const NORMAL_FLEET: &[(&str, &[&str], &str)] = &[
    ("processor_a", &["PIX", "CARD"], "BR"),
    ("processor_b", &["CARD"], "BR"),
    ("processor_c", &["PIX"], "BR"),
    ("processor_d", &["CARD", "OXXO"], "MX"),
    ("processor_e", &["PSE", "CARD"], "CO"),
];

impl Simulator {
    async fn normal_traffic(&self, count: usize) -> usize {
        for _ in 0..count {
            let (id, methods, country) = {
                let mut rng = rand::thread_rng();
                NORMAL_FLEET[rng.gen_range(0..NORMAL_FLEET.len())]
            };
            let method = {
                let mut rng = rand::thread_rng();
                methods[rng.gen_range(0..methods.len())]
            };
            let result = normal_result();
            self.send_transaction(id, result, method, country).await;
        }
        count
    }

    // processor_a fails 90% of the time; the rest of the fleet stays normal.
    async fn outage_traffic(&self, count: usize) -> usize {
        let others: &[(&str, &str, &str)] = &[
            ("processor_b", "CARD", "BR"),
            ("processor_c", "PIX", "BR"),
            ("processor_d", "CARD", "MX"),
            ("processor_e", "PSE", "CO"),
        ];
        for _ in 0..count {
            let to_primary = rand::thread_rng().gen::<f64>() < 0.4;
            if to_primary {
                self.send_transaction("processor_a", outage_result(), "PIX", "BR")
                    .await;
            } else {
                let (id, method, country) = {
                    let mut rng = rand::thread_rng();
                    others[rng.gen_range(0..others.len())]
                };
                self.send_transaction(id, normal_result(), method, country).await;
            }
        }
        count
    }

    // processor_a's error rate ramps down from 50% toward 5%.
    async fn recovery_traffic(&self, count: usize) -> usize {
        let mut error_rate = 0.5;
        let decrement = 0.4 / count as f64;
        for _ in 0..count {
            let to_primary = rand::thread_rng().gen::<f64>() < 0.3;
            if to_primary {
                let result = if rand::thread_rng().gen::<f64>() < error_rate {
                    "error"
                } else {
                    normal_result()
                };
                self.send_transaction("processor_a", result, "PIX", "BR").await;
                error_rate = (error_rate - decrement).max(0.05);
            } else {
                self.send_transaction("processor_c", normal_result(), "PIX", "BR")
                    .await;
            }
        }
        count
    }

    // Best effort: a refused connection just drops the event.
    async fn send_transaction(&self, processor_id: &str, result: &str, method: &str, country: &str) {
        let amount_minor = rand::thread_rng().gen_range(100..1_000_000);
        let body = json!({
            "processor_id": processor_id,
            "result": result,
            "payment_method": method,
            "country": country,
            "amount_minor": amount_minor,
            "currency": currency_for(country),
        });
        let _ = self
            .client
            .post(format!("{}/transactions", self.base_url))
            .json(&body)
            .send()
            .await;
    }

    async fn print_health(&self) -> Result<()> {
        let resp: serde_json::Value = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .json()
            .await?;
        let empty = vec![];
        let processors = resp["processors"].as_array().unwrap_or(&empty);
        println!("  processors: {}", processors.len());
        for p in processors {
            println!(
                "    - {}: {} (auth_rate: {:.1}%, txs: {})",
                p["processor_id"].as_str().unwrap_or("?"),
                p["status"].as_str().unwrap_or("?"),
                p["authorization_rate"].as_f64().unwrap_or(0.0) * 100.0,
                p["total_transactions"].as_u64().unwrap_or(0),
            );
        }
        Ok(())
    }

    async fn print_routing(&self, method: &str, country: &str) -> Result<()> {
        let resp: serde_json::Value = self
            .client
            .get(format!(
                "{}/routing/recommend?payment_method={}&country={}",
                self.base_url, method, country
            ))
            .send()
            .await?
            .json()
            .await?;
        let empty = vec![];
        let recs = resp["recommendations"].as_array().unwrap_or(&empty);
        println!("  routing for {}/{}:", method, country);
        for r in recs {
            let marker = if r["recommended"].as_bool().unwrap_or(false) {
                " <- recommended"
            } else {
                ""
            };
            println!(
                "    #{} {} [{}] {:.1}%{}",
                r["rank"],
                r["processor_id"].as_str().unwrap_or("?"),
                r["status"].as_str().unwrap_or("?"),
                r["authorization_rate"].as_f64().unwrap_or(0.0) * 100.0,
                marker,
            );
        }
        Ok(())
    }

    async fn print_alerts(&self) -> Result<()> {
        let resp: serde_json::Value = self
            .client
            .get(format!("{}/alerts", self.base_url))
            .send()
            .await?
            .json()
            .await?;
        let empty = vec![];
        let alerts = resp["alerts"].as_array().unwrap_or(&empty);
        if alerts.is_empty() {
            println!("  no alerts");
            return Ok(());
        }
        for a in alerts {
            println!(
                "  - {}: {} -> {} ({})",
                a["processor_id"].as_str().unwrap_or("?"),
                a["from_status"].as_str().unwrap_or("?"),
                a["to_status"].as_str().unwrap_or("?"),
                a["reason"].as_str().unwrap_or("?"),
            );
        }
        Ok(())
    }
}

// 75% approved, 20% declined, 5% error.
fn normal_result() -> &'static str {
    let r = rand::thread_rng().gen::<f64>();
    if r < 0.75 {
        "approved"
    } else if r < 0.95 {
        "declined"
    } else {
        "error"
    }
}

fn outage_result() -> &'static str {
    if rand::thread_rng().gen::<f64>() < 0.90 {
        "error"
    } else {
        "approved"
    }
}

fn currency_for(country: &str) -> &'static str {
    match country {
        "BR" => "BRL",
        "MX" => "MXN",
        "CO" => "COP",
        _ => "USD",
    }
}
