//! Cliente de línea de comandos del backend de combustible
//!
//! Caller HTTP puro: no tiene lógica propia, solo arma requests contra la
//! API REST y muestra las respuestas.

use std::collections::HashMap;
use std::env;

use anyhow::Result;
use serde_json::{json, Value};

fn base_url() -> String {
    env::var("CARFUEL_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    let client = reqwest::Client::new();

    match command.as_str() {
        "create-car" => handle_create_car(&client, &args).await?,
        "add-fuel" => handle_add_fuel(&client, &args).await?,
        "fuel-stats" => handle_fuel_stats(&client, &args).await?,
        other => {
            println!("❌ Comando desconocido: {}", other);
            print_usage();
        }
    }

    Ok(())
}

async fn handle_create_car(client: &reqwest::Client, args: &[String]) -> Result<()> {
    let params = parse_arguments(args);

    let (Some(brand), Some(model), Some(year)) =
        (params.get("brand"), params.get("model"), params.get("year"))
    else {
        println!("❌ Faltan parámetros requeridos: --brand, --model, --year");
        return Ok(());
    };

    let body = json!({
        "brand": brand,
        "model": model,
        "year": year.parse::<i32>()?,
    });

    let response = client
        .post(format!("{}/api/cars", base_url()))
        .json(&body)
        .send()
        .await?;

    if response.status().as_u16() == 201 {
        let body: Value = response.json().await?;
        let car = &body["data"];
        println!("✅ Car creado exitosamente!");
        println!("   ID: {}", car["id"]);
        println!("   Brand: {}", car["brand"]);
        println!("   Model: {}", car["model"]);
        println!("   Year: {}", car["year"]);
    } else {
        println!("❌ No se pudo crear el car. Status: {}", response.status());
    }

    Ok(())
}

async fn handle_add_fuel(client: &reqwest::Client, args: &[String]) -> Result<()> {
    let params = parse_arguments(args);

    let (Some(car_id), Some(liters), Some(price), Some(odometer)) = (
        params.get("car-id"),
        params.get("liters"),
        params.get("price"),
        params.get("odometer"),
    ) else {
        println!("❌ Faltan parámetros requeridos: --car-id, --liters, --price, --odometer");
        return Ok(());
    };

    let body = json!({
        "liters": liters.parse::<f64>()?,
        "price": price.parse::<f64>()?,
        "odometer": odometer.parse::<i32>()?,
    });

    let response = client
        .post(format!("{}/api/cars/{}/fuel", base_url(), car_id))
        .json(&body)
        .send()
        .await?;

    match response.status().as_u16() {
        200 => println!("✅ Repostaje registrado exitosamente!"),
        404 => println!("❌ Car no encontrado (id {})", car_id),
        status => println!("❌ Error registrando repostaje. Status: {}", status),
    }

    Ok(())
}

async fn handle_fuel_stats(client: &reqwest::Client, args: &[String]) -> Result<()> {
    let params = parse_arguments(args);

    let Some(car_id) = params.get("car-id") else {
        println!("❌ Falta parámetro requerido: --car-id");
        return Ok(());
    };

    let response = client
        .get(format!("{}/api/cars/{}/fuel/stats", base_url(), car_id))
        .send()
        .await?;

    if response.status().is_success() {
        let stats: Value = response.json().await?;
        println!("⛽ Estadísticas del car {}:", car_id);
        println!("   Total combustible: {} L", stats["total_fuel"]);
        println!("   Gasto total: {}", stats["total_cost"]);
        println!("   Consumo promedio: {} L/100", stats["avg_consumption"]);
    } else {
        println!("❌ Car no encontrado o sin datos de combustible");
    }

    Ok(())
}

/// Parsear argumentos estilo `--clave valor`
fn parse_arguments(args: &[String]) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let mut i = 1;
    while i + 1 < args.len() {
        if let Some(key) = args[i].strip_prefix("--") {
            params.insert(key.to_string(), args[i + 1].clone());
            i += 2;
        } else {
            i += 1;
        }
    }
    params
}

fn print_usage() {
    println!("Uso: carfuel-cli <comando> [opciones]");
    println!();
    println!("Comandos:");
    println!("  create-car --brand <brand> --model <model> --year <year>");
    println!("  add-fuel   --car-id <id> --liters <l> --price <p> --odometer <km>");
    println!("  fuel-stats --car-id <id>");
    println!();
    println!("Variables de entorno:");
    println!("  CARFUEL_URL  URL del backend (default: http://localhost:8080)");
}
