//! Translation performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ppl_soap_translator::extract::{extract_array_values, extract_value};
use ppl_soap_translator::models::QueryValue;
use ppl_soap_translator::services::detect_operation;
use ppl_soap_translator::utils::query::construct_query_string;
use ppl_soap_translator::{translate_request, RequestTranslator};

const CREATE_PACKAGES: &str = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:v1="http://myapi.ppl.cz/v1">
   <soapenv:Body>
      <v1:CreatePackages>
         <v1:Packages>
            <v1:MyApiPackageIn>
               <v1:PackProductType>BUSS</v1:PackProductType>
               <v1:Sender><v1:City>Praha</v1:City><v1:Name>Shop</v1:Name><v1:Street>Hlavni 1</v1:Street><v1:ZipCode>11000</v1:ZipCode></v1:Sender>
               <v1:Recipient><v1:City>Brno</v1:City><v1:Name>Jan</v1:Name><v1:Phone>+420777</v1:Phone><v1:Email>jan@example.cz</v1:Email></v1:Recipient>
               <v1:PaymentInfo><v1:CodCurrency>CZK</v1:CodCurrency><v1:CodPrice>990</v1:CodPrice></v1:PaymentInfo>
               <v1:Weight>1.5</v1:Weight>
            </v1:MyApiPackageIn>
         </v1:Packages>
      </v1:CreatePackages>
   </soapenv:Body>
</soapenv:Envelope>"#;

/// GetPackages request listing `count` shipment numbers
fn get_packages_with(count: usize) -> String {
    let items: String = (0..count)
        .map(|i| format!("<arr:string>4099{:07}</arr:string>", i))
        .collect();
    format!(
        "<v1:GetPackages><v1:Filter><v1:PackNumbers>{}</v1:PackNumbers>\
         <v1:DateFrom>01/15/2024</v1:DateFrom></v1:Filter></v1:GetPackages>",
        items
    )
}

/// Benchmark: whole-request translation
fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");
    let get_packages = get_packages_with(10);

    group.bench_function("create_packages", |b| {
        b.iter(|| black_box(translate_request(black_box(CREATE_PACKAGES))))
    });

    group.bench_function("get_packages", |b| {
        b.iter(|| black_box(translate_request(black_box(&get_packages))))
    });

    group.bench_function("unknown_operation", |b| {
        b.iter(|| black_box(translate_request(black_box("<v1:Ping/>"))))
    });

    group.finish();
}

/// Benchmark: array sizes
fn bench_array_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_sizes");

    for size in [1, 10, 100, 1000] {
        let xml = get_packages_with(size);
        group.bench_with_input(BenchmarkId::new("extract_array_values", size), &xml, |b, xml| {
            b.iter(|| black_box(extract_array_values(black_box(xml), "Filter.PackNumbers")))
        });
    }

    group.finish();
}

/// Benchmark: building blocks
fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    group.bench_function("detect_operation", |b| {
        b.iter(|| black_box(detect_operation(black_box(CREATE_PACKAGES))))
    });

    group.bench_function("extract_value", |b| {
        b.iter(|| black_box(extract_value(black_box(CREATE_PACKAGES), "Weight")))
    });

    let translator = RequestTranslator::new("https://api.dhl.com/ecs/ppl/myapi2");
    let descriptor = translator.translate(&get_packages_with(50));
    let Some(call) = descriptor.call() else {
        panic!("benchmark input failed to translate");
    };

    group.bench_function("full_url", |b| b.iter(|| black_box(translator.full_url(black_box(call)))));

    let mut params = call.query_params.clone().unwrap_or_default();
    params.insert("City".to_string(), QueryValue::from("Hradec Králové"));
    group.bench_function("construct_query_string", |b| {
        b.iter(|| black_box(construct_query_string(black_box(&params))))
    });

    group.finish();
}

criterion_group!(benches, bench_translate, bench_array_sizes, bench_components);

criterion_main!(benches);
