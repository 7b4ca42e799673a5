// 2048-bit p, 256-bit q DSA group with a fixed key pair (y = g^x mod p), as hex strings.
// Shared by the integration tests, the benchmark and the dudect harness via include!.

const P: &str = concat!(
    "bf1205bd1be0d915f25bc589e76cb22e00fe45b4ac5972b6282380599ed1749a8440fdbf1c00c6cd92a696f56ca0c3c0",
    "6aff350fcd55ec80797a19517d22a6eaefd35cf9694ef42361b2367f050c19c0fae1f5cd5e5ea42181ef5d55f0fae8de",
    "3a23798bf51f61a6a5d84a7c29ea0aab95424938f3d1d1bd142078a51f7b345ead73dc897bbcb8faaff8e93cb71f1261",
    "1e0d3bd6392d063f1d9336930769872ec6f2c4f39c76dd05eedc271a728e074075291d79c1b3c03e9a5619cbe97eec37",
    "d01c2f5abcc29f22bd6ac24bb833419b3ad6032e8bc208ca1b804427e027bf6acef5484245b101bf63652a38313d7ed8",
    "a5bf59be3465808ec4de7998ea4c024f",
);
const Q: &str = concat!(
    "cb4c7927b0a79be6c038f90e36bc705b339b1af9077f5d48d500d53a28075279",
);
const G: &str = concat!(
    "7f21c3f427b5509ae95404e8c576f7cbc153355bd66431440ae1ceb9ce60ec16dc4d9eefc25fe30c4ebbab1cdcd061a8",
    "d56c5c8091a9fbeccb219eeb534961fdac53b764d52634b5e735e0dd29ba6c3c3626af7159a550eb1ed02604dd12c35e",
    "a18751dea2d4aff37dd5114ad6b4c82e8219b478bbf9633c10e5e5a15880b23877deda195f44e42d2d5c3b9c891c1ee8",
    "b8465f10256dfb0eb42e6275ac8c3c9c3a818551f210f3857f5f03d46e23aacf1375d17df6fbe79537fc1a78d328f7f3",
    "ff995bcefa911d62c18b578bda700bb072b3196754a59a6a541b1bad206b04ee07eb899c7060afa0892c2ea7db29c844",
    "0b8f3f6bd793f7049207a1e9a89d842c",
);
const Y: &str = concat!(
    "803bff91b26fa37e4d0e4041f663dbe89581e3434fae38bd448d808832a3f71f536e737baab0c049b823af16573c7c41",
    "590bfe06081043c7e187440fa381c362081eac24b5169abf13a79192bec6d0d1f58d9bc46de8beaf1e100982708670d8",
    "b790483c7a8ab0810987d9c61238d165778abe9fdf509df61e5693fe95eafef52353b1b7fd7ec8fcc94314f657504d90",
    "8b2922edaf183e011641faf9d383f62585241803cfdddd970d8bbc6f97c44faab75cbdd64d9ea3a38fc83de59aa5ac4d",
    "e57102f54da1bb88cc9da45c4a7cac810c11b872384c5ddb90daf7a7b60b43c6a767356eb4ab1ab9113b0fa35ca92c74",
    "5ee58fd0f7d89cdec784987f267ecdb4",
);
const X: &str = concat!(
    "916aaafb09cad00f78a33f82ee91e3a04990093a1f0d590fb5399bb7f18be3e7",
);
